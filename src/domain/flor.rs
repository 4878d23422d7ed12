//! Flor scoring: three cards of one suit score 20 plus all three envido
//! values. Pure functions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlorResult {
    pub score: u8,
    pub cards: Vec<Card>,
    pub suit: Suit,
}

/// Whether the hand holds three cards of one suit.
pub fn has_flor(hand: &[Card]) -> bool {
    hand.len() >= 3
        && Suit::ALL
            .into_iter()
            .any(|suit| hand.iter().filter(|c| c.suit == suit).count() >= 3)
}

/// Flor score of a hand, or `None` when the hand has no flor.
pub fn flor_score(hand: &[Card]) -> Option<FlorResult> {
    for suit in Suit::ALL {
        let suited: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .take(3)
            .collect();
        if suited.len() < 3 {
            continue;
        }
        let score = 20 + suited.iter().map(|c| c.rank.envido_points()).sum::<u8>();
        return Some(FlorResult {
            score,
            cards: suited,
            suit,
        });
    }
    None
}

/// Best flor across a team's hands, or `None` when nobody has one.
pub fn team_flor(hands: &[Vec<Card>]) -> Option<FlorResult> {
    hands
        .iter()
        .filter_map(|hand| flor_score(hand))
        .max_by_key(|f| f.score)
}

/// Three-way comparison of optional flor results; a missing flor loses.
pub fn compare_flor(a: Option<&FlorResult>, b: Option<&FlorResult>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.score.cmp(&b.score),
    }
}
