//! Truco escalation ladder: Truco, Retruco, Vale Cuatro.
//!
//! Explicit struct state; transitions only move one rung up. The match
//! orchestrator reads `stake()` when a hand is scored — it never drives
//! transitions itself.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// The three callable rungs above the 1-point baseline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TrucoCall {
    Truco,
    Retruco,
    ValeCuatro,
}

impl TrucoCall {
    /// Hand value once this rung is in play.
    pub fn stake(self) -> u8 {
        match self {
            TrucoCall::Truco => 2,
            TrucoCall::Retruco => 3,
            TrucoCall::ValeCuatro => 4,
        }
    }
}

/// Escalation state for one hand. `None` rung is the 1-point baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrucoLadder {
    rung: Option<TrucoCall>,
}

impl TrucoLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rung, `None` at baseline.
    pub fn current(&self) -> Option<TrucoCall> {
        self.rung
    }

    /// Points the hand is worth at the current rung.
    pub fn stake(&self) -> u8 {
        match self.rung {
            None => 1,
            Some(call) => call.stake(),
        }
    }

    fn next_rung(&self) -> Option<TrucoCall> {
        match self.rung {
            None => Some(TrucoCall::Truco),
            Some(TrucoCall::Truco) => Some(TrucoCall::Retruco),
            Some(TrucoCall::Retruco) => Some(TrucoCall::ValeCuatro),
            Some(TrucoCall::ValeCuatro) => None,
        }
    }

    /// Only the immediately next rung is callable; no skipping, no re-raise
    /// past Vale Cuatro.
    pub fn can_call(&self, call: TrucoCall) -> bool {
        self.next_rung() == Some(call)
    }

    pub fn call(&mut self, call: TrucoCall) -> Result<(), DomainError> {
        if !self.can_call(call) {
            return Err(DomainError::illegal_bet(format!(
                "cannot call {call:?} at rung {:?}",
                self.rung
            )));
        }
        self.rung = Some(call);
        Ok(())
    }

    /// Accepting confirms the current rung; the stake stands.
    pub fn accept(&self) {}

    /// Points for the opposing team when the latest raise is rejected:
    /// the stake before that raise.
    pub fn reject(&self) -> u8 {
        match self.rung {
            None | Some(TrucoCall::Truco) => 1,
            Some(TrucoCall::Retruco) => 2,
            Some(TrucoCall::ValeCuatro) => 3,
        }
    }

    /// Back to the 1-point baseline for a new hand.
    pub fn reset(&mut self) {
        self.rung = None;
    }
}
