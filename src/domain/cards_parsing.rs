//! Card parsing from canonical tokens (e.g., "1-espada", "12-oro")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pips_str, suit_str) = s
            .split_once('-')
            .ok_or_else(|| DomainError::ParseCard(format!("Parse card: {s}")))?;

        let pips: u8 = pips_str
            .parse()
            .map_err(|_| DomainError::ParseCard(format!("Parse card: {s}")))?;
        let rank = Rank::from_pips(pips)
            .ok_or_else(|| DomainError::ParseCard(format!("Invalid card value: {pips}")))?;

        let suit = match suit_str {
            "espada" => Suit::Espada,
            "basto" => Suit::Basto,
            "oro" => Suit::Oro,
            "copa" => Suit::Copa,
            _ => return Err(DomainError::ParseCard(format!("Invalid suit: {suit_str}"))),
        };

        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns an error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
