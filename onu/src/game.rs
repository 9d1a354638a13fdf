use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::card::{Card, CardColor, Rank};
use crate::constants::{DRAW_TWO_PENALTY, STARTING_HAND_SIZE, WILD_DRAW_PENALTY};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::pile::DiscardPile;
use crate::player::Player;
use crate::turn::{PlayDirection, TurnAction, TurnOutcome};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Where the turn state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The player at this seat must play or draw.
    AwaitingAction { player: usize },
    /// This player just played a wild card and owes a color choice
    /// before the turn can resolve.
    AwaitingColor { player: usize },
    GameOver { winner: usize },
}

/// The full state of one game: deck, seats, discard pile, direction
/// and turn position. Everything is owned here; there are no ambient
/// globals, and the random source is injected so games can be replayed
/// deterministically.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    deck: Deck,
    players: Vec<Player>,
    discard: DiscardPile,
    direction: PlayDirection,
    current: usize,
    pending_wild: Option<Rank>,
    winner: Option<usize>,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_rng(player_names, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(player_names: Vec<String>, mut rng: R) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        if player_names.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::BlankPlayerName);
        }

        let mut deck = Deck::new();
        let mut players = Vec::with_capacity(player_names.len());
        for name in player_names {
            let hand = deck.deal_hand(&mut rng, STARTING_HAND_SIZE)?;
            players.push(Player::new(name, hand));
        }

        let mut discard = DiscardPile::new();
        discard.play(deck.draw_start_card(&mut rng)?);

        let current = rng.gen_range(0..players.len());
        info!(
            players = players.len(),
            first = %players[current].name(),
            "game set up"
        );

        Ok(Self {
            deck,
            players,
            discard,
            direction: PlayDirection::Clockwise,
            current,
            pending_wild: None,
            winner: None,
            rng,
        })
    }

    /// Applies one action for the active player. User mistakes (bad
    /// index, illegal card, color protocol violations) come back as
    /// recoverable errors with the game state untouched; deck underflow
    /// is a broken invariant and is fatal.
    pub fn take_turn(&mut self, action: TurnAction) -> Result<TurnOutcome> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }

        match action {
            TurnAction::ChooseColor(color) => self.resolve_color(color),
            _ if self.pending_wild.is_some() => Err(GameError::ColorChoicePending),
            TurnAction::Play(index) => self.play_from_hand(index),
            TurnAction::Draw => self.draw_and_maybe_play(),
        }
    }

    pub fn phase(&self) -> Phase {
        if let Some(winner) = self.winner {
            Phase::GameOver { winner }
        } else if self.pending_wild.is_some() {
            Phase::AwaitingColor {
                player: self.current,
            }
        } else {
            Phase::AwaitingAction {
                player: self.current,
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn next_player_index(&self) -> usize {
        self.direction.advance(self.current, self.players.len())
    }

    pub fn top_card(&self) -> Result<&Card> {
        self.discard.top()
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn deck_cards_count(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn discard_cards_count(&self) -> usize {
        self.discard.cards_count()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    fn play_from_hand(&mut self, index: usize) -> Result<TurnOutcome> {
        let player = &self.players[self.current];
        let card = match player.hand.get(index) {
            Some(card) => card.clone(),
            None => {
                return Err(GameError::IndexOutOfRange {
                    index,
                    hand_size: player.cards_count(),
                })
            }
        };

        let top = self.discard.top()?;
        if !card.matches(top) {
            return Err(GameError::InvalidMove {
                card,
                top: top.clone(),
            });
        }

        let card = self.players[self.current].remove_card(index)?;
        debug!(player = %self.players[self.current].name(), card = %card, "card played");
        self.place_and_resolve(card.clone())?;
        Ok(TurnOutcome::Played(card))
    }

    fn draw_and_maybe_play(&mut self) -> Result<TurnOutcome> {
        let card = self.draw_from_deck()?;
        debug!(player = %self.players[self.current].name(), card = %card, "card drawn");

        if card.matches(self.discard.top()?) {
            // a playable drawn card is played immediately
            self.place_and_resolve(card.clone())?;
            Ok(TurnOutcome::DrewAndPlayed(card))
        } else {
            self.players[self.current].add_card(card.clone());
            self.advance_turn();
            Ok(TurnOutcome::DrewAndKept(card))
        }
    }

    fn resolve_color(&mut self, color: CardColor) -> Result<TurnOutcome> {
        let Some(rank) = self.pending_wild.clone() else {
            return Err(GameError::NoPendingColorChoice);
        };
        if color.is_wild() {
            return Err(GameError::NotAStandardColor);
        }

        self.pending_wild = None;
        self.discard.recolor_top(color)?;
        debug!(color = %color, "wild card recolored");

        if rank == Rank::WildDrawFour {
            let victim = self.next_player_index();
            self.draw_to(victim, WILD_DRAW_PENALTY)?;
            self.current = victim;
        }

        self.finish_play();
        Ok(TurnOutcome::ColorChosen(color))
    }

    /// Moves the card to the discard pile and applies its effect. Wild
    /// cards park the turn in the color-choice phase; everything else
    /// runs through to the unconditional end-of-turn advance.
    fn place_and_resolve(&mut self, card: Card) -> Result<()> {
        let rank = card.rank.clone();
        self.discard.play(card);

        match rank {
            Rank::Number(_) => self.finish_play(),
            Rank::Skip => {
                self.advance_turn();
                self.finish_play();
            }
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                debug!(direction = ?self.direction, "play direction reversed");
                if self.players.len() == 2 {
                    // between two players a reverse acts as a skip
                    self.advance_turn();
                }
                self.finish_play();
            }
            Rank::DrawTwo => {
                let victim = self.next_player_index();
                self.draw_to(victim, DRAW_TWO_PENALTY)?;
                self.current = victim;
                self.finish_play();
            }
            Rank::WildColorChanger | Rank::WildDrawFour => {
                self.pending_wild = Some(rank);
            }
        }

        Ok(())
    }

    /// The one advance every completed turn gets, followed by the win
    /// check that may end the game.
    fn finish_play(&mut self) {
        self.advance_turn();
        if let Some(index) = self.players.iter().position(|p| p.hand.is_empty()) {
            info!(player = %self.players[index].name(), "wins the game");
            self.winner = Some(index);
        }
    }

    fn advance_turn(&mut self) {
        self.current = self.direction.advance(self.current, self.players.len());
    }

    fn draw_to(&mut self, player_index: usize, count: usize) -> Result<()> {
        debug!(player = %self.players[player_index].name(), count, "forced draw");
        for _ in 0..count {
            let card = self.draw_from_deck()?;
            self.players[player_index].add_card(card);
        }
        Ok(())
    }

    /// Draws one card, recycling the discard pile (minus its top card)
    /// into the deck first if the deck has run dry.
    fn draw_from_deck(&mut self) -> Result<Card> {
        if self.deck.is_empty() {
            let recycled = self.discard.drain_for_reshuffle();
            debug!(count = recycled.len(), "reshuffling discard pile into deck");
            self.deck.refill(recycled);
        }
        self.deck.draw_random(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_player_names(count: usize) -> Vec<String> {
        let mut player_names = Vec::new();
        for i in 0..count {
            player_names.push(format!("Player {}", i + 1));
        }
        player_names
    }

    fn seeded_game(count: usize, seed: u64) -> Game {
        Game::with_rng(create_player_names(count), StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn return_ok_if_enough_players() {
        let result = Game::new(create_player_names(2));
        assert!(matches!(result, Result::Ok(_)));
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Game::new(create_player_names(1)).unwrap_err();
        assert!(matches!(error, GameError::NotEnoughPlayers));
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Game::new(create_player_names(11)).unwrap_err();
        assert!(matches!(error, GameError::TooManyPlayers));
    }

    #[test]
    fn return_err_if_a_name_is_blank() {
        let error = Game::new(vec!["Alice".to_string(), "   ".to_string()]).unwrap_err();
        assert!(matches!(error, GameError::BlankPlayerName));
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let game = seeded_game(4, 1);
        for player in game.players() {
            assert_eq!(player.cards_count(), 7);
        }
    }

    #[test]
    fn setup_seeds_the_discard_pile_with_a_number_card() {
        let game = seeded_game(4, 2);
        let top = game.top_card().unwrap();
        assert!(matches!(top.rank, Rank::Number(_)), "got {top}");
        assert_eq!(game.discard_cards_count(), 1);
    }

    #[test]
    fn setup_leaves_the_expected_deck_size() {
        // 108 cards minus four hands of 7 minus the start card
        let game = seeded_game(4, 3);
        assert_eq!(game.deck_cards_count(), 108 - 4 * 7 - 1);
    }

    #[test]
    fn setup_starts_clockwise_awaiting_an_action() {
        let game = seeded_game(4, 4);
        assert_eq!(game.direction(), PlayDirection::Clockwise);
        assert!(matches!(game.phase(), Phase::AwaitingAction { player } if player < 4));
    }

    #[test]
    fn starting_player_varies_with_the_seed() {
        let starts: Vec<usize> = (0..32)
            .map(|seed| seeded_game(4, seed).current_player_index())
            .collect();
        assert!(starts.iter().any(|&index| index != starts[0]));
    }
}
