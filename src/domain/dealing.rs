//! Deterministic dealing from the 40-card Spanish deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Cards dealt to each participant at the start of a hand.
pub const HAND_SIZE: usize = 3;

/// Generate the full 40-card deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Full deck shuffled deterministically for the given seed.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal `hand_size` cards to each of `player_count` players from the top of
/// `deck`, one card per player per pass. Remaining cards are not used.
pub fn deal(
    deck: &[Card],
    player_count: usize,
    hand_size: usize,
) -> Result<Vec<Vec<Card>>, DomainError> {
    let needed = player_count * hand_size;
    if deck.len() < needed {
        return Err(DomainError::insufficient_cards(format!(
            "deck holds {} cards, {needed} needed",
            deck.len()
        )));
    }

    let mut hands = vec![Vec::with_capacity(hand_size); player_count];
    for pass in 0..hand_size {
        for (player, hand) in hands.iter_mut().enumerate() {
            hand.push(deck[pass * player_count + player]);
        }
    }
    Ok(hands)
}

/// Shuffle a fresh deck with `seed` and deal the standard 3-card truco hands.
pub fn deal_hands(player_count: usize, seed: u64) -> Result<Vec<Vec<Card>>, DomainError> {
    deal(&shuffled_deck(seed), player_count, HAND_SIZE)
}
