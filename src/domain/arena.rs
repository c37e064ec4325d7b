//! Arena holding the character and the walls of a display.

use super::{is_move_allowed, Character, Delta, Size, Wall};

/// Result of a single simulation step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// No displacement was requested.
    Idle,
    Moved { turned: bool },
    /// At least one wall is in the way, nothing changed.
    Blocked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    display: Size,
    character: Character,
    walls: Vec<Wall>,
}

impl Arena {
    pub fn new(display: Size, character: Character, walls: Vec<Wall>) -> Self {
        Self {
            display,
            character,
            walls,
        }
    }

    pub fn display(&self) -> Size {
        self.display
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The character may be displaced by `delta` only if its current sprite hits none of the
    /// walls afterwards.
    pub fn is_move_allowed(&self, delta: Delta) -> bool {
        self.walls
            .iter()
            .all(|w| is_move_allowed(&self.character, w, delta))
    }

    /// Advance by one tick. A blocked move is rejected as a whole, even if one of its axes alone
    /// would be free.
    pub fn step(&mut self, delta: Delta) -> StepOutcome {
        if delta.is_zero() {
            return StepOutcome::Idle;
        }

        if !self.is_move_allowed(delta) {
            return StepOutcome::Blocked;
        }

        let direction = self.character.direction();
        self.character.move_by(delta, self.display);

        StepOutcome::Moved {
            turned: direction != self.character.direction(),
        }
    }
}
