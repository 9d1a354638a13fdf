//! Stdin/stdout implementations of the engine's collaborator traits.

use std::io::{self, Write};

use strum::IntoEnumIterator;

use onu::card::{Card, CardColor};
use onu::frontend::{Display, Input, PlayerAction};
use onu::game::{MAX_PLAYERS, MIN_PLAYERS};
use onu::player::Player;

pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }

    /// Returns the trimmed line, or `None` on EOF or a read error.
    fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{message}");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).ok()?;
        if read == 0 {
            None
        } else {
            Some(line.trim().to_string())
        }
    }
}

impl Input for ConsoleInput {
    fn request_player_count(&mut self) -> usize {
        loop {
            let Some(line) = self.prompt(&format!(
                "How many players are playing? ({MIN_PLAYERS}-{MAX_PLAYERS}): "
            )) else {
                // EOF: hand back an invalid count and let setup fail
                return 0;
            };
            match line.parse::<usize>() {
                Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return count,
                _ => println!("Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."),
            }
        }
    }

    fn request_player_name(&mut self, position: usize) -> String {
        loop {
            let Some(name) = self.prompt(&format!("Enter the name for player {position}: "))
            else {
                return String::new();
            };
            if !name.is_empty() {
                return name;
            }
            println!("Names must not be blank.");
        }
    }

    fn request_action(&mut self, _player: &Player) -> PlayerAction {
        loop {
            let Some(line) = self.prompt(
                "Enter the number of the card you want to play, 'd' to draw, or 'q' to quit: ",
            ) else {
                return PlayerAction::Quit;
            };
            if line.eq_ignore_ascii_case("d") {
                return PlayerAction::Draw;
            }
            if line.eq_ignore_ascii_case("q") {
                return PlayerAction::Quit;
            }
            if let Ok(number) = line.parse::<usize>() {
                if number >= 1 {
                    // hands are shown 1-based
                    return PlayerAction::Play(number - 1);
                }
            }
            println!("Please enter a card number, 'd', or 'q'.");
        }
    }

    fn request_color_choice(&mut self) -> CardColor {
        let choices = CardColor::iter()
            .filter(|color| !color.is_wild())
            .map(|color| color.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        loop {
            let Some(line) = self.prompt(&format!(
                "Wild card played! What color should it be? ({choices}): "
            )) else {
                // EOF: fall back to red so the loop cannot wedge
                return CardColor::Red;
            };
            match line.parse::<CardColor>() {
                Ok(color) if !color.is_wild() => return color,
                _ => println!("Please choose one of: {choices}."),
            }
        }
    }
}

pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Display for ConsoleDisplay {
    fn show_turn_banner(&mut self, player: &Player) {
        println!("\n*** It is {}'s turn. ***", player.name());
    }

    fn show_top_card(&mut self, card: &Card) {
        println!("The top card is: {card}");
    }

    fn show_hand(&mut self, player: &Player) {
        let mut line = format!("{}'s cards:", player.name());
        for (number, card) in player.hand.iter().enumerate() {
            line.push_str(&format!("   {}.) {}", number + 1, card));
        }
        println!("{line}");
    }

    fn show_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn show_winner(&mut self, player: &Player) {
        println!("\n*** Congratulations, {} has won the game! ***", player.name());
    }
}
