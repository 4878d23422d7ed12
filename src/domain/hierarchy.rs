//! Official Truco Argentino card hierarchy.
//!
//! Strength is a fixed total order over (rank, suit) with shared tiers:
//! cards in the same tier tie against each other. The match below is
//! exhaustive, so every card resolves to exactly one tier by construction.

use std::cmp::Ordering;

use super::cards_types::{Card, Rank, Suit};

/// Strength tier of a card. Lower is stronger; tier 1 is the ancho de espada.
pub fn strength(card: Card) -> u8 {
    match (card.rank, card.suit) {
        (Rank::Ancho, Suit::Espada) => 1,
        (Rank::Ancho, Suit::Basto) => 2,
        (Rank::Siete, Suit::Espada) => 3,
        (Rank::Siete, Suit::Oro) => 4,
        (Rank::Tres, _) => 5,
        (Rank::Dos, _) => 6,
        // False anchos (copa and oro) share a tier
        (Rank::Ancho, _) => 7,
        (Rank::Rey, _) => 8,
        (Rank::Caballo, _) => 9,
        (Rank::Sota, _) => 10,
        // Remaining sevens (copa and basto) share a tier
        (Rank::Siete, _) => 11,
        (Rank::Seis, _) => 12,
        (Rank::Cinco, _) => 13,
        (Rank::Cuatro, _) => 14,
    }
}

/// Three-way comparison by truco strength.
/// `Ordering::Greater` means `a` beats `b`; `Equal` means they tie.
pub fn compare_cards(a: Card, b: Card) -> Ordering {
    // Lower tier = stronger card
    strength(b).cmp(&strength(a))
}

/// Whether `a` strictly beats `b`.
pub fn beats(a: Card, b: Card) -> bool {
    compare_cards(a, b) == Ordering::Greater
}

/// The unique strongest card among `cards`, or `None` when the top tier is
/// shared by two or more cards (a tie) or the slice is empty.
pub fn strongest(cards: &[Card]) -> Option<Card> {
    let (&first, rest) = cards.split_first()?;

    let mut winner = first;
    let mut tied = false;
    for &card in rest {
        match compare_cards(card, winner) {
            Ordering::Greater => {
                winner = card;
                tied = false;
            }
            Ordering::Equal => tied = true,
            Ordering::Less => {}
        }
    }

    (!tied).then_some(winner)
}
