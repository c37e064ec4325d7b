//! Controllable character with one sprite size per facing direction.

use super::{ByDirection, Delta, Direction, HasCollision, Position, Rectangle, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    position: Position,
    direction: Direction,
    sizes: ByDirection<Size>,
}

impl Character {
    pub fn new(direction: Direction, sizes: ByDirection<Size>) -> Self {
        Self {
            position: Position::default(),
            direction,
            sizes,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size(&self, direction: Direction) -> Size {
        *self.sizes.get(direction)
    }

    /// Rectangle of the sprite for the given facing at the current position.
    pub fn rectangle_facing(&self, direction: Direction) -> Rectangle {
        Rectangle::new(self.position, self.size(direction))
    }

    pub fn put(&mut self, position: Position) {
        self.position = position;
    }

    /// Move by `delta` within `display` and turn towards the dominant axis of `delta`.
    ///
    /// Each axis is updated independently. An axis keeps its coordinate if the new coordinate
    /// would leave the range `(-extent/2, display_extent - extent/2]` for any of the sprite
    /// sizes, so up to half a sprite may hang over the border of the display.
    pub fn move_by(&mut self, delta: Delta, display: Size) {
        let x = self.position.x() + delta.dx();
        let y = self.position.y() + delta.dy();

        let x_valid = self
            .sizes
            .values()
            .all(|s| within_overscan(x, s.width(), display.width()));
        let y_valid = self
            .sizes
            .values()
            .all(|s| within_overscan(y, s.height(), display.height()));

        self.position = Position::new(
            if x_valid { x } else { self.position.x() },
            if y_valid { y } else { self.position.y() },
        );

        if let Some(direction) = delta.dominant_direction() {
            self.direction = direction;
        }
    }
}

impl HasCollision for Character {
    fn rectangle(&self) -> Rectangle {
        self.rectangle_facing(self.direction)
    }
}

/// `-extent/2 < coordinate <= display - extent/2`, compared on doubled values to stay exact for
/// odd extents.
fn within_overscan(coordinate: i32, extent: i32, display: i32) -> bool {
    -extent < 2 * coordinate && 2 * coordinate <= 2 * display - extent
}
