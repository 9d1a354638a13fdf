//! Rules engine for an Uno-style card game: deck composition, dealing,
//! move legality, special-card effects and turn order under a
//! reversible play direction. Rendering and input live behind the
//! narrow collaborator traits in [`frontend`]; a driver loop outside
//! this crate gathers actions and applies them with
//! [`game::Game::take_turn`].

pub mod card;
mod constants;
pub mod deck;
pub mod error;
pub mod frontend;
pub mod game;
pub mod pile;
pub mod player;
pub mod turn;
