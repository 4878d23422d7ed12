//! Round resolution and the hand-winner rule.
//!
//! A round is one card per participant; a hand is up to three rounds. Ties
//! are first-class: a tied round has no winner, and the hand-winner rule
//! gives tied rounds their deferring behavior.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::hierarchy::strongest;
use super::players::{PlayerId, TeamId};

/// One card played into the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player_id: PlayerId,
    pub card: Card,
    pub team_id: TeamId,
}

/// Outcome of a resolved round. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner_team: Option<TeamId>,
    pub winning_card: Option<Card>,
    pub plays: Vec<Play>,
    pub is_tie: bool,
}

/// Resolve one round from its plays.
///
/// Play order is audit information only; the result depends solely on the
/// set of cards. Zero plays yields the degenerate no-winner, no-tie result
/// (should not occur under correct orchestration).
pub fn resolve_round(plays: &[Play]) -> RoundResult {
    if plays.is_empty() {
        return RoundResult {
            winner_team: None,
            winning_card: None,
            plays: Vec::new(),
            is_tie: false,
        };
    }

    let cards: Vec<Card> = plays.iter().map(|p| p.card).collect();
    match strongest(&cards) {
        Some(card) => {
            // The winner is whoever played that exact card identity
            let winner_team = plays
                .iter()
                .find(|p| p.card == card)
                .map(|p| p.team_id.clone());
            RoundResult {
                winner_team,
                winning_card: Some(card),
                plays: plays.to_vec(),
                is_tie: false,
            }
        }
        None => RoundResult {
            winner_team: None,
            winning_card: None,
            plays: plays.to_vec(),
            is_tie: true,
        },
    }
}

/// Decide whether the hand already has a winner, given the rounds resolved
/// so far. Checked after every round, in priority order:
///
/// 1. two outright round wins take the hand (can fire after round 2);
/// 2. a decisive first round followed by a tied second round wins — the tie
///    defers to the earlier decisive round;
/// 3. a tied first round followed by a decisive second round wins;
/// 4. otherwise undecided. Three rounds with no rule firing means the hand
///    ends without a scoring winner.
pub fn hand_winner(results: &[RoundResult]) -> Option<TeamId> {
    let mut wins: Vec<(&TeamId, u8)> = Vec::new();
    for result in results {
        if result.is_tie {
            continue;
        }
        let Some(team) = result.winner_team.as_ref() else {
            continue;
        };
        match wins.iter_mut().find(|(t, _)| *t == team) {
            Some((_, count)) => *count += 1,
            None => wins.push((team, 1)),
        }
    }

    if let Some((team, _)) = wins.iter().find(|(_, count)| *count >= 2) {
        return Some((*team).clone());
    }

    if results.len() >= 2 {
        let first = &results[0];
        let second = &results[1];

        if !first.is_tie && first.winner_team.is_some() && second.is_tie {
            return first.winner_team.clone();
        }
        if first.is_tie && !second.is_tie && second.winner_team.is_some() {
            return second.winner_team.clone();
        }
    }

    None
}
