//! Domain layer: pure truco rules types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod envido;
pub mod envido_ladder;
pub mod flor;
pub mod game_match;
pub mod hierarchy;
pub mod players;
pub mod rounds;
pub mod seed_derivation;
pub mod truco_ladder;
pub mod turn_order;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_match;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, deal_hands, full_deck, shuffled_deck, HAND_SIZE};
pub use envido::{compare_envido, envido_score, team_envido, EnvidoResult};
pub use envido_ladder::{EnvidoCall, EnvidoLadder};
pub use flor::{compare_flor, flor_score, has_flor, team_flor, FlorResult};
pub use game_match::{
    MatchConfig, MatchPhase, PlayOutcome, TeamConfig, TrucoMatch, DEFAULT_POINTS_TO_WIN,
};
pub use hierarchy::{beats, compare_cards, strongest};
pub use players::{Player, PlayerId, Team, TeamId};
pub use rounds::{hand_winner, resolve_round, Play, RoundResult};
pub use seed_derivation::derive_dealing_seed;
pub use truco_ladder::{TrucoCall, TrucoLadder};
pub use turn_order::{build_turn_order, TurnOrder};
