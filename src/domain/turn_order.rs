//! Turn management: fixed seating order with a cycling cursor.

use std::collections::HashMap;

use super::players::{PlayerId, TeamId};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Build the seating order for a match.
///
/// Without team assignments the input order is preserved. With them,
/// players are grouped by team (first-seen order within each team) and the
/// groups are interleaved round-robin, skipping a team once its members run
/// out. This keeps 2v2 and 3v3 play alternating fairly.
pub fn build_turn_order(
    player_ids: &[PlayerId],
    team_of: &HashMap<PlayerId, TeamId>,
) -> Vec<PlayerId> {
    if team_of.is_empty() {
        return player_ids.to_vec();
    }

    let mut groups: Vec<(&TeamId, Vec<&PlayerId>)> = Vec::new();
    for id in player_ids {
        let Some(team) = team_of.get(id) else {
            continue;
        };
        match groups.iter_mut().find(|(t, _)| *t == team) {
            Some((_, members)) => members.push(id),
            None => groups.push((team, vec![id])),
        }
    }

    let largest = groups.iter().map(|(_, m)| m.len()).max().unwrap_or(0);
    let mut order = Vec::with_capacity(player_ids.len());
    for i in 0..largest {
        for (_, members) in &groups {
            if let Some(id) = members.get(i) {
                order.push((*id).clone());
            }
        }
    }
    order
}

/// Cyclic cursor over a fixed seating order. The order is computed once at
/// match construction; only the cursor moves.
#[derive(Debug, Clone)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    cursor: usize,
}

impl TurnOrder {
    pub fn new(seats: Vec<PlayerId>) -> Result<Self, DomainError> {
        if seats.is_empty() {
            return Err(DomainError::configuration(
                "turn order requires at least one player",
            ));
        }
        Ok(Self { seats, cursor: 0 })
    }

    /// The player whose turn it is.
    ///
    /// The empty case is unreachable after construction; it is still checked
    /// and reported as an invariant breach rather than a panic.
    pub fn current(&self) -> Result<&PlayerId, DomainError> {
        self.seats
            .get(self.cursor)
            .ok_or_else(|| DomainError::invariant("turn order has no current player"))
    }

    /// Move the cursor to the next seat, wrapping around.
    pub fn advance(&mut self) -> Result<&PlayerId, DomainError> {
        if self.seats.is_empty() {
            return Err(DomainError::invariant("turn order has no seats"));
        }
        self.cursor = (self.cursor + 1) % self.seats.len();
        self.current()
    }

    /// Reposition the cursor on a specific player.
    pub fn set_current(&mut self, player_id: &str) -> Result<(), DomainError> {
        match self.seats.iter().position(|id| id == player_id) {
            Some(index) => {
                self.cursor = index;
                Ok(())
            }
            None => Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player_id} not in turn order"),
            )),
        }
    }

    /// Cursor back to the first seat (start of a hand).
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }
}
