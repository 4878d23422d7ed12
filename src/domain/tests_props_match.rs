use proptest::prelude::*;

use crate::domain::game_match::{MatchConfig, TeamConfig, TrucoMatch};
use crate::domain::test_prelude::proptest_config;

fn config(team_size: usize, points_to_win: u8, seed: u64) -> MatchConfig {
    let side = |prefix: &str| TeamConfig {
        id: prefix.to_string(),
        player_ids: (0..team_size).map(|i| format!("{prefix}{i}")).collect(),
        name: None,
    };
    MatchConfig {
        teams: vec![side("a"), side("b")],
        points_to_win: Some(points_to_win),
        rng_seed: Some(seed),
    }
}

/// Step the match once by playing an arbitrary card from the turn-holder's
/// hand. Returns false once the match is over.
fn step(m: &mut TrucoMatch, pick: usize) -> bool {
    let Some(player) = m.current_player() else {
        return false;
    };
    let id = player.id.clone();
    let card = player.hand[pick % player.hand.len()];
    m.play(&id, card).expect("turn-holder playing an own card");
    true
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Scores only ever grow, and finishing is a one-way door.
    #[test]
    fn scores_are_monotone_and_finish_is_terminal(
        team_size in 1usize..=3,
        points_to_win in 1u8..=6,
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..3, 0..200),
    ) {
        let mut m = TrucoMatch::new(config(team_size, points_to_win, seed))
            .expect("well-formed configuration");

        let mut prev: Vec<u8> = m.teams().iter().map(|t| t.score).collect();
        let mut was_finished = false;

        for pick in picks {
            if !step(&mut m, pick) {
                break;
            }

            let scores: Vec<u8> = m.teams().iter().map(|t| t.score).collect();
            for (before, after) in prev.iter().zip(&scores) {
                prop_assert!(after >= before);
            }
            prev = scores;

            prop_assert!(!was_finished || m.is_finished());
            was_finished = m.is_finished();

            for player in m.players() {
                prop_assert!(player.hand.len() <= 3);
            }
            prop_assert!(m.plays_in_round().len() < m.players().len());
        }
    }

    /// Playing to completion always crowns a team at or above the threshold,
    /// and the loser stays below it.
    #[test]
    fn finished_match_has_a_threshold_winner(
        seed in any::<u64>(),
        points_to_win in 1u8..=3,
    ) {
        let mut m = TrucoMatch::new(config(1, points_to_win, seed))
            .expect("well-formed configuration");

        // A 1-point hand lands every 2-3 rounds; this bound is generous.
        for _ in 0..2000 {
            if !step(&mut m, 0) {
                break;
            }
        }

        prop_assert!(m.is_finished());
        let winner = m.winner().expect("finished match has a winner");
        prop_assert!(winner.score >= points_to_win);
        for team in m.teams() {
            if team.id != winner.id {
                prop_assert!(team.score < points_to_win);
            }
        }
    }

    /// The same configuration and seed replay to the identical deal,
    /// hand after hand.
    #[test]
    fn seeded_matches_replay_identically(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..3, 0..60),
    ) {
        let mut m1 = TrucoMatch::new(config(2, 4, seed)).expect("well-formed configuration");
        let mut m2 = TrucoMatch::new(config(2, 4, seed)).expect("well-formed configuration");

        for pick in picks {
            let live1 = step(&mut m1, pick);
            let live2 = step(&mut m2, pick);
            prop_assert_eq!(live1, live2);
            prop_assert_eq!(m1.players(), m2.players());
            prop_assert_eq!(m1.teams(), m2.teams());
            prop_assert_eq!(m1.hand_no(), m2.hand_no());
        }
    }
}
