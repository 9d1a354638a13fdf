use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least 2 players")]
    NotEnoughPlayers,
    #[error("a game allows at most 10 players")]
    TooManyPlayers,
    #[error("player names must not be blank")]
    BlankPlayerName,
    #[error("{card} cannot be played on {top}")]
    InvalidMove { card: Card, top: Card },
    #[error("there is no card at position {index}, the hand holds {hand_size} cards")]
    IndexOutOfRange { index: usize, hand_size: usize },
    #[error("no wild card is waiting for a color")]
    NoPendingColorChoice,
    #[error("a color must be chosen for the wild card first")]
    ColorChoicePending,
    #[error("a wild card must be recolored to one of the four standard colors")]
    NotAStandardColor,
    #[error("the game is already over")]
    GameOver,
    #[error("the draw pile and the discard pile are both exhausted")]
    EmptyDeck,
    #[error("cannot deal {needed} cards from a deck of {available}")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("the discard pile has no cards")]
    EmptyPile,
}

impl GameError {
    /// Errors a frontend answers with a re-prompt; everything else is a
    /// broken invariant and aborts the game.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GameError::InvalidMove { .. }
                | GameError::IndexOutOfRange { .. }
                | GameError::NoPendingColorChoice
                | GameError::ColorChoicePending
                | GameError::NotAStandardColor
        )
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
