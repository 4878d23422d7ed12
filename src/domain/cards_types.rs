//! Core card-related types for the Spanish 40-card deck: Card, Rank, Suit

use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Espada,
    Basto,
    Oro,
    Copa,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Espada, Suit::Basto, Suit::Oro, Suit::Copa];

    /// Lowercase Spanish name, used in the canonical card token.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Espada => "espada",
            Suit::Basto => "basto",
            Suit::Oro => "oro",
            Suit::Copa => "copa",
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// The ten printed values of the Spanish deck (no 8s or 9s).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ancho,
    Dos,
    Tres,
    Cuatro,
    Cinco,
    Seis,
    Siete,
    Sota,
    Caballo,
    Rey,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ancho,
        Rank::Dos,
        Rank::Tres,
        Rank::Cuatro,
        Rank::Cinco,
        Rank::Seis,
        Rank::Siete,
        Rank::Sota,
        Rank::Caballo,
        Rank::Rey,
    ];

    /// Printed value on the card face.
    pub fn pips(self) -> u8 {
        match self {
            Rank::Ancho => 1,
            Rank::Dos => 2,
            Rank::Tres => 3,
            Rank::Cuatro => 4,
            Rank::Cinco => 5,
            Rank::Seis => 6,
            Rank::Siete => 7,
            Rank::Sota => 10,
            Rank::Caballo => 11,
            Rank::Rey => 12,
        }
    }

    /// Rank for a printed value, if it exists in the deck.
    pub fn from_pips(pips: u8) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.pips() == pips)
    }

    /// Value this card contributes to envido/flor sums. Face cards count 0.
    pub fn envido_points(self) -> u8 {
        match self {
            Rank::Sota | Rank::Caballo | Rank::Rey => 0,
            numeral => numeral.pips(),
        }
    }
}

/// A card is identified by its (rank, suit) pair; two cards with the same
/// pair are the same card. The canonical token `"<pips>-<suit>"` (e.g.
/// `"1-espada"`) is produced by `Display` and accepted by `FromStr`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.rank.pips(), self.suit)
    }
}

// Note: Ord/Eq on Card is only for stable sorting: rank order then suit order.
// Do not use for round resolution; truco strength lives in `hierarchy`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
