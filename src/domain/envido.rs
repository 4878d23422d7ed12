//! Envido scoring: two same-suit cards score 20 plus their envido points;
//! a hand with no suited pair scores its single best card. Pure functions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvidoResult {
    pub score: u8,
    /// Cards contributing to the score.
    pub cards: Vec<Card>,
}

impl EnvidoResult {
    fn empty() -> Self {
        Self {
            score: 0,
            cards: Vec::new(),
        }
    }
}

/// Best envido score of a single hand. An empty hand scores 0.
pub fn envido_score(hand: &[Card]) -> EnvidoResult {
    let mut best: Option<EnvidoResult> = None;

    for suit in Suit::ALL {
        let mut suited: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
        if suited.len() < 2 {
            continue;
        }
        // Highest two envido values of the suit
        suited.sort_by(|a, b| b.rank.envido_points().cmp(&a.rank.envido_points()));
        suited.truncate(2);
        let score = 20 + suited.iter().map(|c| c.rank.envido_points()).sum::<u8>();

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(EnvidoResult {
                score,
                cards: suited,
            });
        }
    }

    if let Some(result) = best {
        return result;
    }

    // No suited pair: the highest single card decides
    match hand.iter().copied().max_by_key(|c| c.rank.envido_points()) {
        Some(card) => EnvidoResult {
            score: card.rank.envido_points(),
            cards: vec![card],
        },
        None => EnvidoResult::empty(),
    }
}

/// Best envido score across a team's hands.
pub fn team_envido(hands: &[Vec<Card>]) -> EnvidoResult {
    hands
        .iter()
        .map(|hand| envido_score(hand))
        .max_by_key(|r| r.score)
        .unwrap_or_else(EnvidoResult::empty)
}

/// Three-way comparison of envido results by score.
pub fn compare_envido(a: &EnvidoResult, b: &EnvidoResult) -> Ordering {
    a.score.cmp(&b.score)
}
