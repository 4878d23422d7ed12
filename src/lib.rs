#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::{Card, Rank, Suit};
pub use domain::{EnvidoCall, EnvidoLadder, TrucoCall, TrucoLadder};
pub use domain::{MatchConfig, MatchPhase, PlayOutcome, TeamConfig, TrucoMatch};
pub use domain::{Play, Player, PlayerId, RoundResult, Team, TeamId};
pub use errors::domain::{DomainError, NotFoundKind};
