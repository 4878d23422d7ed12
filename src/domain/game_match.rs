//! Match orchestration: the state machine tying together turn order,
//! card-play validation, round resolution, hand scoring, and termination.
//!
//! A match is a synchronous in-memory unit: every call completes before
//! returning and there is no internal locking. A `play` call either fully
//! applies or fully rejects with no state change.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::cards_types::Card;
use super::dealing::{deal, shuffled_deck, HAND_SIZE};
use super::players::{Player, PlayerId, Team, TeamId};
use super::rounds::{hand_winner, resolve_round, Play, RoundResult};
use super::seed_derivation::derive_dealing_seed;
use super::truco_ladder::TrucoLadder;
use super::turn_order::{build_turn_order, TurnOrder};
use crate::errors::domain::{DomainError, NotFoundKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const ROUNDS_PER_HAND: usize = 3;
pub const DEFAULT_POINTS_TO_WIN: u8 = 30;

/// One side of the match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub id: TeamId,
    pub player_ids: Vec<PlayerId>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub teams: Vec<TeamConfig>,
    /// Win threshold; defaults to 30 when absent.
    pub points_to_win: Option<u8>,
    /// Base seed for deterministic dealing; drawn from entropy when absent.
    pub rng_seed: Option<u64>,
}

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Cards are distributed and no card has been played into the current
    /// round yet.
    Dealt,
    /// Some but not all participants have played into the current round.
    RoundInProgress,
    /// Terminal, irreversible.
    MatchFinished,
}

/// What a successful `play` call changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Whether this play completed a round.
    pub round_completed: bool,
    /// Winner of the completed round, if it had one.
    pub round_winner: Option<TeamId>,
    /// Whether the completed round was a tie.
    pub round_tied: bool,
    /// Whether the hand ended with this play.
    pub hand_completed: bool,
    /// Winner of the completed hand; `None` on the degenerate all-tie hand.
    pub hand_winner: Option<TeamId>,
    /// Points awarded for the hand (the truco stake), 0 if none.
    pub points_awarded: u8,
    /// Whether the match reached its terminal state.
    pub match_finished: bool,
}

impl PlayOutcome {
    fn pending() -> Self {
        Self {
            round_completed: false,
            round_winner: None,
            round_tied: false,
            hand_completed: false,
            hand_winner: None,
            points_awarded: 0,
            match_finished: false,
        }
    }
}

/// A single Truco match between two teams of equal size (1v1 up to 3v3).
///
/// The orchestrator owns teams, participants, the turn cursor, and all
/// transient hand state. It holds a truco ladder only to read the stake
/// when a hand is scored; the caller drives escalation through
/// [`TrucoMatch::truco_mut`]. The envido ladder is an independent component
/// the caller wires alongside the match.
#[derive(Debug, Clone)]
pub struct TrucoMatch {
    players: Vec<Player>,
    teams: Vec<Team>,
    turn: TurnOrder,
    phase: MatchPhase,
    /// 1-based hand counter, also the dealing-seed input.
    hand_no: u32,
    round_results: Vec<RoundResult>,
    plays: Vec<Play>,
    truco: TrucoLadder,
    points_to_win: u8,
    rng_seed: u64,
}

impl TrucoMatch {
    pub fn new(config: MatchConfig) -> Result<Self, DomainError> {
        validate_config(&config)?;

        let teams: Vec<Team> = config
            .teams
            .iter()
            .map(|t| Team::new(t.id.clone(), t.player_ids.clone(), t.name.clone()))
            .collect();

        let mut players = Vec::new();
        for team in &config.teams {
            for player_id in &team.player_ids {
                players.push(Player::new(player_id.clone(), team.id.clone()));
            }
        }

        let team_of: HashMap<PlayerId, TeamId> = players
            .iter()
            .map(|p| (p.id.clone(), p.team_id.clone()))
            .collect();
        let player_ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
        let turn = TurnOrder::new(build_turn_order(&player_ids, &team_of))?;

        let rng_seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());

        let mut game_match = Self {
            players,
            teams,
            turn,
            phase: MatchPhase::Dealt,
            hand_no: 1,
            round_results: Vec::new(),
            plays: Vec::new(),
            truco: TrucoLadder::new(),
            points_to_win: config.points_to_win.unwrap_or(DEFAULT_POINTS_TO_WIN),
            rng_seed,
        };
        game_match.deal_hands()?;
        Ok(game_match)
    }

    /// Play a card for a participant.
    ///
    /// Fails without mutating anything when the match is over, the
    /// participant is not the turn-holder, or the ids don't resolve. On the
    /// final play of a round the round is resolved, the hand-winner rule is
    /// re-evaluated, and the hand (and possibly the match) may end.
    pub fn play(&mut self, player_id: &str, card: Card) -> Result<PlayOutcome, DomainError> {
        if self.phase == MatchPhase::MatchFinished {
            return Err(DomainError::MatchFinished);
        }

        let current = self.turn.current()?;
        if current != player_id {
            return Err(DomainError::out_of_turn(format!(
                "it is {current}'s turn, not {player_id}'s"
            )));
        }

        let player_index = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, format!("player {player_id}"))
            })?;

        if !self.players[player_index].has_card(card) {
            return Err(DomainError::CardNotInHand(format!(
                "{card} is not in {player_id}'s hand"
            )));
        }

        // All validation passed; from here the call fully applies.
        let player = &mut self.players[player_index];
        let card = player
            .take_card(card)
            .ok_or_else(|| DomainError::invariant("card vanished between check and removal"))?;
        let team_id = player.team_id.clone();

        debug!(player = %player_id, card = %card, "card played");
        self.plays.push(Play {
            player_id: player_id.to_string(),
            card,
            team_id,
        });
        self.turn.advance()?;

        let mut outcome = PlayOutcome::pending();
        if self.plays.len() < self.players.len() {
            self.phase = MatchPhase::RoundInProgress;
            return Ok(outcome);
        }

        self.finish_round(&mut outcome)?;
        Ok(outcome)
    }

    fn finish_round(&mut self, outcome: &mut PlayOutcome) -> Result<(), DomainError> {
        let result = resolve_round(&self.plays);
        self.plays.clear();

        debug!(
            hand_no = self.hand_no,
            round = self.round_results.len() + 1,
            winner = result.winner_team.as_deref(),
            tie = result.is_tie,
            "round resolved"
        );

        outcome.round_completed = true;
        outcome.round_winner = result.winner_team.clone();
        outcome.round_tied = result.is_tie;
        self.round_results.push(result);

        // Re-evaluated after every round so two outright wins short-circuit
        // the third round.
        let winner = hand_winner(&self.round_results);
        if winner.is_some() || self.round_results.len() >= ROUNDS_PER_HAND {
            self.finish_hand(winner, outcome)?;
        } else {
            self.phase = MatchPhase::Dealt;
        }
        Ok(())
    }

    fn finish_hand(
        &mut self,
        winner: Option<TeamId>,
        outcome: &mut PlayOutcome,
    ) -> Result<(), DomainError> {
        outcome.hand_completed = true;
        outcome.hand_winner = winner.clone();

        if let Some(team_id) = winner {
            let points = self.truco.stake();
            let team = self
                .teams
                .iter_mut()
                .find(|t| t.id == team_id)
                .ok_or_else(|| {
                    DomainError::invariant(format!("hand winner {team_id} is not a match team"))
                })?;
            team.add_points(points);
            outcome.points_awarded = points;
            info!(hand_no = self.hand_no, team = %team_id, points, "hand scored");
        } else {
            // Degenerate all-tie hand: no points, straight to a redeal.
            info!(hand_no = self.hand_no, "hand ended without a winner");
        }

        if let Some(team) = self
            .teams
            .iter()
            .find(|t| t.score >= self.points_to_win)
        {
            info!(team = %team.id, score = team.score, "match finished");
            self.phase = MatchPhase::MatchFinished;
            outcome.match_finished = true;
            return Ok(());
        }

        self.start_new_hand()
    }

    fn start_new_hand(&mut self) -> Result<(), DomainError> {
        self.round_results.clear();
        self.plays.clear();
        self.truco.reset();
        self.hand_no += 1;
        self.deal_hands()?;
        self.turn.reset();
        self.phase = MatchPhase::Dealt;
        Ok(())
    }

    fn deal_hands(&mut self) -> Result<(), DomainError> {
        let seed = derive_dealing_seed(self.rng_seed, self.hand_no);
        let hands = deal(&shuffled_deck(seed), self.players.len(), HAND_SIZE)?;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.replace_hand(hand);
        }
        info!(hand_no = self.hand_no, "dealt new hand");
        Ok(())
    }

    // --- read-only queries ---

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Participant holding the turn, `None` once the match is finished.
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase == MatchPhase::MatchFinished {
            return None;
        }
        let id = self.turn.current().ok()?;
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Results of the rounds resolved so far in the current hand.
    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    /// Plays made into the round currently in progress.
    pub fn plays_in_round(&self) -> &[Play] {
        &self.plays
    }

    /// 0-based index of the round currently being played.
    pub fn current_round(&self) -> usize {
        self.round_results.len()
    }

    /// 1-based counter of the hand currently being played.
    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }

    pub fn points_to_win(&self) -> u8 {
        self.points_to_win
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::MatchFinished
    }

    /// The winning team once the match is finished, `None` before that.
    /// The first team at or above the threshold in team order wins.
    pub fn winner(&self) -> Option<&Team> {
        if !self.is_finished() {
            return None;
        }
        self.teams.iter().find(|t| t.score >= self.points_to_win)
    }

    /// Truco escalation state for the current hand.
    pub fn truco(&self) -> &TrucoLadder {
        &self.truco
    }

    /// Caller-driven escalation; the orchestrator only reads the stake when
    /// the hand is scored.
    pub fn truco_mut(&mut self) -> &mut TrucoLadder {
        &mut self.truco
    }

    /// Replace dealt hands with fixed ones, for scripted tests.
    #[cfg(test)]
    pub(crate) fn set_hands(&mut self, hands: &[(&str, Vec<Card>)]) {
        for (player_id, hand) in hands {
            if let Some(player) = self.players.iter_mut().find(|p| &p.id == player_id) {
                player.replace_hand(hand.clone());
            }
        }
    }
}

fn validate_config(config: &MatchConfig) -> Result<(), DomainError> {
    if config.teams.len() != 2 {
        return Err(DomainError::configuration(format!(
            "match requires exactly 2 teams, got {}",
            config.teams.len()
        )));
    }

    let sizes: Vec<usize> = config.teams.iter().map(|t| t.player_ids.len()).collect();
    if sizes[0] != sizes[1] {
        return Err(DomainError::configuration(format!(
            "teams must have the same number of players, got {} and {}",
            sizes[0], sizes[1]
        )));
    }

    let total: usize = sizes.iter().sum();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
        return Err(DomainError::configuration(format!(
            "match requires {MIN_PLAYERS}-{MAX_PLAYERS} players, got {total}"
        )));
    }

    if config.teams[0].id == config.teams[1].id {
        return Err(DomainError::configuration("team ids must be distinct"));
    }

    let mut seen: Vec<&PlayerId> = Vec::with_capacity(total);
    for team in &config.teams {
        for id in &team.player_ids {
            if seen.contains(&id) {
                return Err(DomainError::configuration(format!(
                    "duplicate player id {id}"
                )));
            }
            seen.push(id);
        }
    }

    Ok(())
}
