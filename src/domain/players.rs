//! Participant and team bookkeeping.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;

pub type PlayerId = String;
pub type TeamId = String;

/// A participant in a match. The hand is replaced wholesale on every deal
/// and shrinks as cards are played; it never exceeds three cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, team_id: impl Into<TeamId>) -> Self {
        Self {
            id: id.into(),
            team_id: team_id.into(),
            hand: Vec::new(),
        }
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove `card` from the hand by identity, returning it if present.
    pub fn take_card(&mut self, card: Card) -> Option<Card> {
        let pos = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(pos))
    }

    pub fn replace_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }
}

/// One of the two sides of a match. Score only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub player_ids: Vec<PlayerId>,
    pub score: u8,
    pub name: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, player_ids: Vec<PlayerId>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            player_ids,
            score: 0,
            name,
        }
    }

    pub fn add_points(&mut self, points: u8) {
        self.score = self.score.saturating_add(points);
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_ids.iter().any(|id| id == player_id)
    }

    pub fn size(&self) -> usize {
        self.player_ids.len()
    }
}
