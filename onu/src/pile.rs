use crate::card::{Card, CardColor};
use crate::error::{GameError, Result};

/// Played cards in play order; only the last one is semantically
/// active for move legality.
#[derive(Debug)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub fn top(&self) -> Result<&Card> {
        self.0.last().ok_or(GameError::EmptyPile)
    }

    pub(crate) fn play(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Replaces the top card with a recolored copy. Wild recoloring
    /// swaps in a new value so cards stay immutable everywhere else.
    pub(crate) fn recolor_top(&mut self, color: CardColor) -> Result<()> {
        let top = self.0.pop().ok_or(GameError::EmptyPile)?;
        self.0.push(top.with_color(color));
        Ok(())
    }

    /// Removes and returns every card except the top, which stays in
    /// place as the active card.
    pub(crate) fn drain_for_reshuffle(&mut self) -> Vec<Card> {
        if self.0.len() < 2 {
            return Vec::new();
        }
        let keep_from = self.0.len() - 1;
        self.0.drain(..keep_from).collect()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}
