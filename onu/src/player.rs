use crate::card::Card;
use crate::error::{GameError, Result};

#[derive(Debug)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String, cards: Vec<Card>) -> Self {
        Self { name, hand: cards }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.hand.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }
}
