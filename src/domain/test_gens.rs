// Proptest generators for domain types.
// These generators ensure distinct cards and well-formed plays for
// property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::rounds::Play;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Espada),
        Just(Suit::Basto),
        Just(Suit::Oro),
        Just(Suit::Copa),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Ancho),
        Just(Rank::Dos),
        Just(Rank::Tres),
        Just(Rank::Cuatro),
        Just(Rank::Cinco),
        Just(Rank::Seis),
        Just(Rank::Siete),
        Just(Rank::Sota),
        Just(Rank::Caballo),
        Just(Rank::Rey),
    ]
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card { rank, suit })
}

/// Generate a vector of N distinct cards by shuffling the full deck
pub fn distinct_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck = full_deck();
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// One full round of plays for `player_count` participants split over two
/// teams ("A" gets even seats, "B" odd seats, matching interleaved order).
pub fn round_plays(player_count: usize) -> impl Strategy<Value = Vec<Play>> {
    distinct_cards(player_count).prop_map(|cards| {
        cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| Play {
                player_id: format!("p{i}"),
                card,
                team_id: if i % 2 == 0 { "A".into() } else { "B".into() },
            })
            .collect()
    })
}

/// A round of plays for 2, 4, or 6 participants.
pub fn any_round_plays() -> impl Strategy<Value = Vec<Play>> {
    prop_oneof![Just(2usize), Just(4), Just(6)].prop_flat_map(round_plays)
}
