//! Fixed game configuration.

use crate::domain::{Arena, ByDirection, Character, Direction, Size, Wall};

/// All fractions are relative to the display size. Sprite sizes are truncated to whole pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub title: &'static str,
    pub display: Size,
    pub ticks_per_second: f64,
    pub character_scale: (f64, f64),
    pub character_start: (f64, f64),
    pub character_direction: Direction,
    pub wall_scale: (f64, f64),
    pub wall_positions: &'static [(f64, f64)],
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig::new(
        "Hack'n'Slash",
        Size::new(800, 600),
        60.0,
        (0.1, 0.2),
        (0.5, 0.5),
        Direction::Left,
        (0.2, 0.2),
        &[(0.2, 0.2)],
    );

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        title: &'static str,
        display: Size,
        ticks_per_second: f64,
        character_scale: (f64, f64),
        character_start: (f64, f64),
        character_direction: Direction,
        wall_scale: (f64, f64),
        wall_positions: &'static [(f64, f64)],
    ) -> Self {
        GameConfig {
            title,
            display,
            ticks_per_second,
            character_scale,
            character_start,
            character_direction,
            wall_scale,
            wall_positions,
        }
    }

    pub fn character_size(&self) -> Size {
        self.display
            .scaled(self.character_scale.0, self.character_scale.1)
    }

    pub fn wall_size(&self) -> Size {
        self.display.scaled(self.wall_scale.0, self.wall_scale.1)
    }

    pub fn create_arena(&self) -> Arena {
        let mut character = Character::new(
            self.character_direction,
            ByDirection::splat(self.character_size()),
        );
        character.put(
            self.display
                .fraction(self.character_start.0, self.character_start.1),
        );

        let walls = self
            .wall_positions
            .iter()
            .map(|(x, y)| Wall::new(self.display.fraction(*x, *y), self.wall_size()))
            .collect();

        Arena::new(self.display, character, walls)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
