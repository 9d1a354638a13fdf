use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The color printed on a card. `Wild` is the declared color of a wild
/// card until it is played and recolored.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl CardColor {
    pub fn is_wild(self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    WildColorChanger,
    WildDrawFour,
}

/// A card is a color/rank pair. Recoloring a wild card produces a new
/// value via [`Card::with_color`] instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub color: CardColor,
    pub rank: Rank,
}

impl Card {
    pub fn new(color: CardColor, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Whether this card may be played on `top`: same rank, same color,
    /// or the card is wild. The same predicate applies to hand cards
    /// and just-drawn cards.
    pub fn matches(&self, top: &Card) -> bool {
        self.rank == top.rank || self.color == top.color || self.color.is_wild()
    }

    pub fn with_color(self, color: CardColor) -> Self {
        Self { color, ..self }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rank {
            Rank::Number(number) => write!(f, "{} {}", self.color, number),
            Rank::Skip => write!(f, "{} Skip", self.color),
            Rank::Reverse => write!(f, "{} Reverse", self.color),
            Rank::DrawTwo => write!(f, "{} Draw Two", self.color),
            Rank::WildColorChanger => {
                if self.color.is_wild() {
                    write!(f, "Wild")
                } else {
                    write!(f, "Wild ({})", self.color)
                }
            }
            Rank::WildDrawFour => {
                if self.color.is_wild() {
                    write!(f, "Wild Draw Four")
                } else {
                    write!(f, "Wild Draw Four ({})", self.color)
                }
            }
        }
    }
}
