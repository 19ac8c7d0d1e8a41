//! Card parsing and formatting: the `<kind><suit>` glyph codec (e.g. "Т♠",
//! "10♥"). Kind letters are the Cyrillic court glyphs the players type.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if !(2..=3).contains(&chars.len()) {
            return Err(parse_err(s));
        }
        let suit = match chars[chars.len() - 1] {
            '\u{2666}' => Suit::Diamonds,
            '\u{2665}' => Suit::Hearts,
            '\u{2660}' => Suit::Spades,
            '\u{2663}' => Suit::Clubs,
            _ => return Err(parse_err(s)),
        };
        let kind: String = chars[..chars.len() - 1]
            .iter()
            .collect::<String>()
            .to_uppercase();
        let rank = match kind.as_str() {
            "Т" => Rank::Ace,
            "К" => Rank::King,
            "Д" => Rank::Queen,
            "В" => Rank::Jack,
            "10" => Rank::Ten,
            "9" => Rank::Nine,
            "8" => Rank::Eight,
            "7" => Rank::Seven,
            "6" => Rank::Six,
            _ => return Err(parse_err(s)),
        };
        Ok(Card { suit, rank })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let kind = match self.rank {
            Rank::Ace => "Т",
            Rank::King => "К",
            Rank::Queen => "Д",
            Rank::Jack => "В",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
        };
        let suit = match self.suit {
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
        };
        write!(f, "{kind}{suit}")
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Fails if any token is invalid.
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
