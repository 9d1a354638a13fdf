use crate::card::{Card, CardColor};

/// The seating order turns rotate in. Toggled only by a reverse card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Clockwise,
    Counterclockwise,
}

impl PlayDirection {
    pub fn reversed(self) -> Self {
        match self {
            PlayDirection::Clockwise => PlayDirection::Counterclockwise,
            PlayDirection::Counterclockwise => PlayDirection::Clockwise,
        }
    }

    /// The next seat after `current`, one step in this direction.
    pub fn advance(self, current: usize, player_count: usize) -> usize {
        match self {
            PlayDirection::Clockwise => (current + 1) % player_count,
            PlayDirection::Counterclockwise => (current + player_count - 1) % player_count,
        }
    }
}

/// What a driver may ask the engine to do for the active player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(usize),
    Draw,
    ChooseColor(CardColor),
}

/// What the engine did, for the frontend to announce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Card),
    DrewAndPlayed(Card),
    DrewAndKept(Card),
    ColorChosen(CardColor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_clockwise() {
        assert_eq!(PlayDirection::Clockwise.advance(0, 4), 1);
        assert_eq!(PlayDirection::Clockwise.advance(3, 4), 0);
    }

    #[test]
    fn advance_wraps_counterclockwise() {
        assert_eq!(PlayDirection::Counterclockwise.advance(2, 4), 1);
        assert_eq!(PlayDirection::Counterclockwise.advance(0, 4), 3);
    }

    #[test]
    fn advance_composed_with_its_inverse_is_the_identity() {
        for player_count in 2..=10 {
            for index in 0..player_count {
                let there = PlayDirection::Clockwise.advance(index, player_count);
                let back = PlayDirection::Counterclockwise.advance(there, player_count);
                assert_eq!(back, index);
            }
        }
    }

    #[test]
    fn reversing_twice_is_the_identity() {
        assert_eq!(
            PlayDirection::Clockwise.reversed().reversed(),
            PlayDirection::Clockwise
        );
        assert_eq!(
            PlayDirection::Counterclockwise.reversed().reversed(),
            PlayDirection::Counterclockwise
        );
    }
}
