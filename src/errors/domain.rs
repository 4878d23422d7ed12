//! Domain-level error type used across the engine.
//!
//! Every fallible operation reports synchronously through `DomainError`;
//! nothing is retried or swallowed internally. `Invariant` signals a defect
//! in the engine itself rather than caller misuse and should be treated as
//! fatal for the affected match instance.

use thiserror::Error;

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Team,
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Bad match setup: wrong team count, uneven teams, out-of-range players
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A participant acted when it was not their turn
    #[error("out of turn: {0}")]
    OutOfTurn(String),
    /// Missing resource in domain terms
    #[error("not found {kind:?}: {detail}")]
    NotFound { kind: NotFoundKind, detail: String },
    /// The played card is not in the participant's hand
    #[error("card not in hand: {0}")]
    CardNotInHand(String),
    /// Operation attempted after the match reached its terminal state
    #[error("match is already finished")]
    MatchFinished,
    /// A bet violated the escalation ladder rules
    #[error("illegal bet: {0}")]
    IllegalBet(String),
    /// The deck cannot cover the requested hands
    #[error("not enough cards: {0}")]
    InsufficientCards(String),
    /// A card token failed to parse
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Internal invariant breach; a defect, not caller misuse
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration(detail.into())
    }
    pub fn out_of_turn(detail: impl Into<String>) -> Self {
        Self::OutOfTurn(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }
    pub fn illegal_bet(detail: impl Into<String>) -> Self {
        Self::IllegalBet(detail.into())
    }
    pub fn insufficient_cards(detail: impl Into<String>) -> Self {
        Self::InsufficientCards(detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
