mod console;

use onu::card::{Card, Rank};
use onu::frontend::{Display, Input, PlayerAction};
use onu::game::{Game, Phase};
use onu::turn::{TurnAction, TurnOutcome};

use console::{ConsoleDisplay, ConsoleInput};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let mut input = ConsoleInput::new();
    let mut display = ConsoleDisplay::new();

    let game = setup(&mut input)?;
    run(game, &mut input, &mut display)
}

fn setup(input: &mut impl Input) -> color_eyre::Result<Game> {
    let count = input.request_player_count();
    tracing::debug!(count, "setting up players");

    let mut names = Vec::with_capacity(count);
    for position in 1..=count {
        names.push(input.request_player_name(position));
    }

    Ok(Game::new(names)?)
}

/// The outer game loop. The engine only exposes queries and
/// `take_turn`; gathering input and showing state happens here.
fn run<I: Input, D: Display>(mut game: Game, input: &mut I, display: &mut D) -> color_eyre::Result<()> {
    loop {
        if display.poll_quit() {
            return Ok(());
        }

        match game.phase() {
            Phase::GameOver { .. } => {
                let winner = game.winner().expect("the game is over, so a winner exists");
                display.show_winner(winner);
                return Ok(());
            }
            Phase::AwaitingColor { .. } => {
                let color = input.request_color_choice();
                apply(&mut game, TurnAction::ChooseColor(color), display)?;
            }
            Phase::AwaitingAction { .. } => {
                display.show_turn_banner(game.current_player());
                display.show_top_card(game.top_card()?);
                display.show_hand(game.current_player());

                let action = match input.request_action(game.current_player()) {
                    PlayerAction::Quit => return Ok(()),
                    PlayerAction::Draw => TurnAction::Draw,
                    PlayerAction::Play(index) => TurnAction::Play(index),
                };
                apply(&mut game, action, display)?;
            }
        }
    }
}

/// User mistakes turn into a message and a re-prompt on the next loop
/// iteration; engine invariant violations abort the game.
fn apply<D: Display>(game: &mut Game, action: TurnAction, display: &mut D) -> color_eyre::Result<()> {
    match game.take_turn(action) {
        Ok(outcome) => announce(&outcome, display),
        Err(error) if error.is_user_error() => {
            display.show_message(&format!("Sorry, {error}. Please try again."));
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

fn announce<D: Display>(outcome: &TurnOutcome, display: &mut D) {
    match outcome {
        TurnOutcome::Played(card) => announce_effect(card, display),
        TurnOutcome::DrewAndPlayed(card) => {
            display.show_message(&format!("The drawn {card} can be played!"));
            announce_effect(card, display);
        }
        TurnOutcome::DrewAndKept(card) => {
            display.show_message(&format!("Drew {card}; it cannot be played."));
        }
        TurnOutcome::ColorChosen(color) => {
            display.show_message(&format!("The color is now {color}."));
        }
    }
}

fn announce_effect<D: Display>(card: &Card, display: &mut D) {
    match card.rank {
        Rank::Number(_) => {}
        Rank::Skip => display.show_message("The next player is skipped!"),
        Rank::Reverse => display.show_message("Changing directions!"),
        Rank::DrawTwo => {
            display.show_message("The next player draws two cards and loses their turn!");
        }
        Rank::WildColorChanger => display.show_message("Wild card played!"),
        Rank::WildDrawFour => {
            display.show_message("Wild draw four played! The next player draws four cards and loses their turn!");
        }
    }
}
