//! The engine's boundary with its input and display collaborators.
//! The engine never reads state back from a [`Display`]; a driver loop
//! owned by the frontend gathers actions and applies them via
//! [`crate::game::Game::take_turn`].

use crate::card::{Card, CardColor};
use crate::player::Player;

/// A player's intent for their turn, as gathered by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Play(usize),
    Draw,
    Quit,
}

pub trait Input {
    fn request_player_count(&mut self) -> usize;
    fn request_player_name(&mut self, position: usize) -> String;
    fn request_action(&mut self, player: &Player) -> PlayerAction;
    fn request_color_choice(&mut self) -> CardColor;
}

pub trait Display {
    fn show_turn_banner(&mut self, player: &Player);
    fn show_top_card(&mut self, card: &Card);
    fn show_hand(&mut self, player: &Player);
    fn show_message(&mut self, message: &str);
    fn show_winner(&mut self, player: &Player);

    /// Polled once per loop iteration so an external cancel signal can
    /// end the process without game-state cleanup.
    fn poll_quit(&mut self) -> bool {
        false
    }
}
