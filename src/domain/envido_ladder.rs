//! Envido escalation ladder: Envido, Real Envido, Falta Envido.
//!
//! Explicit struct holding the call history and an active flag. The stake
//! of a Falta Envido depends on the match context (points to win and the
//! probable winner's score), so `stake` takes both as arguments.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum EnvidoCall {
    Envido,
    RealEnvido,
    FaltaEnvido,
}

impl EnvidoCall {
    /// Fixed point value of the call; `None` for Falta Envido, whose value
    /// depends on the match score.
    pub fn points(self) -> Option<u8> {
        match self {
            EnvidoCall::Envido => Some(2),
            EnvidoCall::RealEnvido => Some(3),
            EnvidoCall::FaltaEnvido => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvidoLadder {
    calls: Vec<EnvidoCall>,
    active: bool,
}

impl EnvidoLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> &[EnvidoCall] {
        &self.calls
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ladder legality: Envido only opens, Real Envido needs Envido first,
    /// nothing follows Falta Envido, and no call repeats.
    pub fn can_call(&self, call: EnvidoCall) -> bool {
        if self.calls.contains(&EnvidoCall::FaltaEnvido) || self.calls.contains(&call) {
            return false;
        }
        match call {
            EnvidoCall::FaltaEnvido => true,
            EnvidoCall::RealEnvido => self.calls.contains(&EnvidoCall::Envido),
            EnvidoCall::Envido => self.calls.is_empty(),
        }
    }

    pub fn call(&mut self, call: EnvidoCall) -> Result<(), DomainError> {
        if !self.can_call(call) {
            return Err(DomainError::illegal_bet(format!(
                "cannot call {call:?} after {:?}",
                self.calls
            )));
        }
        self.calls.push(call);
        self.active = true;
        Ok(())
    }

    /// Accept the pending bet; the stake is settled when hands are compared.
    pub fn accept(&self) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::illegal_bet("no active envido bet"));
        }
        Ok(())
    }

    /// Reject the latest call, deactivating the ladder. Returns the points
    /// awarded to the calling side: 1 for a lone Envido, otherwise 1 plus
    /// the accumulated value below the rejected call.
    pub fn reject(&mut self) -> Result<u8, DomainError> {
        if !self.active {
            return Err(DomainError::illegal_bet("no active envido bet"));
        }

        let points = match self.calls.split_last() {
            None | Some((EnvidoCall::Envido, _)) => 1,
            Some((EnvidoCall::RealEnvido, _)) => 1 + 2,
            Some((EnvidoCall::FaltaEnvido, earlier)) => {
                1 + earlier.iter().filter_map(|c| c.points()).sum::<u8>()
            }
        };

        self.active = false;
        Ok(points)
    }

    /// Points at stake if the bet is accepted. With a Falta Envido in play
    /// this is whatever the probable winner still needs to reach the match
    /// threshold; otherwise the sum of the fixed call values.
    pub fn stake(&self, points_to_win: u8, leader_score: u8) -> u8 {
        if !self.active {
            return 0;
        }
        if self.calls.contains(&EnvidoCall::FaltaEnvido) {
            return points_to_win.saturating_sub(leader_score);
        }
        self.calls.iter().filter_map(|c| c.points()).sum()
    }

    /// Clear all calls for a new hand.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.active = false;
    }
}
