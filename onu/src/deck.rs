use rand::Rng;
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
    error::{GameError, Result},
};

/// The draw pile. Composition is deterministic; randomness enters only
/// at draw time, so the pile behaves as a bag with no defined order.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter().filter(|color| !color.is_wild()) {
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::new(color, Rank::Number(*number)));
            }

            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::new(color, Rank::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::new(color, Rank::Reverse));
            }

            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::new(color, Rank::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::new(CardColor::Wild, Rank::WildColorChanger));
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push(Card::new(CardColor::Wild, Rank::WildDrawFour));
        }

        Self(cards)
    }

    /// Removes one uniformly random card.
    pub(crate) fn draw_random<R: Rng>(&mut self, rng: &mut R) -> Result<Card> {
        if self.0.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = rng.gen_range(0..self.0.len());
        Ok(self.0.swap_remove(index))
    }

    pub(crate) fn deal_hand<R: Rng>(&mut self, rng: &mut R, count: usize) -> Result<Vec<Card>> {
        if self.0.len() < count {
            return Err(GameError::InsufficientDeck {
                needed: count,
                available: self.0.len(),
            });
        }
        (0..count).map(|_| self.draw_random(rng)).collect()
    }

    /// Samples uniformly until a number card comes up, then removes and
    /// returns it. Rejected special cards stay in the deck.
    pub(crate) fn draw_start_card<R: Rng>(&mut self, rng: &mut R) -> Result<Card> {
        if !self.0.iter().any(|card| matches!(card.rank, Rank::Number(_))) {
            return Err(GameError::EmptyDeck);
        }
        loop {
            let index = rng.gen_range(0..self.0.len());
            if matches!(self.0[index].rank, Rank::Number(_)) {
                return Ok(self.0.swap_remove(index));
            }
        }
    }

    /// Takes back the recycled discard pile when the deck runs dry.
    pub(crate) fn refill(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::new().cards_count(), TOTAL_CARDS_IN_DECK as usize);
    }

    #[test]
    fn one_zero_and_two_of_each_other_number_per_color() {
        let deck = Deck::new();
        for color in CardColor::iter().filter(|color| !color.is_wild()) {
            let count_of = |rank: Rank| {
                deck.0
                    .iter()
                    .filter(|card| card.color == color && card.rank == rank)
                    .count()
            };
            assert_eq!(count_of(Rank::Number(0)), 1);
            for number in 1..=9 {
                assert_eq!(count_of(Rank::Number(number)), 2);
            }
            assert_eq!(count_of(Rank::Skip), 2);
            assert_eq!(count_of(Rank::Reverse), 2);
            assert_eq!(count_of(Rank::DrawTwo), 2);
        }
    }

    #[test]
    fn drawing_shrinks_the_deck_by_one() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);
        deck.draw_random(&mut rng).unwrap();
        assert_eq!(deck.cards_count(), TOTAL_CARDS_IN_DECK as usize - 1);
    }

    #[test]
    fn drawing_from_an_empty_deck_fails() {
        let mut deck = Deck(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            deck.draw_random(&mut rng),
            Err(GameError::EmptyDeck)
        ));
    }

    #[test]
    fn dealing_more_than_available_fails() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);
        let error = deck.deal_hand(&mut rng, 200).unwrap_err();
        assert!(matches!(
            error,
            GameError::InsufficientDeck {
                needed: 200,
                available: 108
            }
        ));
        // a failed deal takes nothing
        assert_eq!(deck.cards_count(), 108);
    }

    #[test]
    fn start_card_is_always_numeric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut deck = Deck::new();
            let card = deck.draw_start_card(&mut rng).unwrap();
            assert!(matches!(card.rank, Rank::Number(_)), "got {card}");
            assert_eq!(deck.cards_count(), 107);
        }
    }

    #[test]
    fn refill_restores_recycled_cards() {
        let mut deck = Deck(Vec::new());
        deck.refill(vec![
            Card::new(CardColor::Red, Rank::Number(1)),
            Card::new(CardColor::Blue, Rank::Skip),
        ]);
        assert_eq!(deck.cards_count(), 2);
    }
}
