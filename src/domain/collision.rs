//! Collision detection based on axis-aligned rectangles.

use super::{Delta, Position, Size};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.rectangle().intersects(&other.rectangle())
    }

    fn rectangle(&self) -> Rectangle;
}

/// Axis-aligned rectangle with its position at the top-left corner.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rectangle {
    position: Position,
    size: Size,
}

impl Rectangle {
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn left(&self) -> i32 {
        self.position.x()
    }

    pub fn right(&self) -> i32 {
        self.position.x() + self.size.width()
    }

    pub fn top(&self) -> i32 {
        self.position.y()
    }

    pub fn bottom(&self) -> i32 {
        self.position.y() + self.size.height()
    }

    pub fn is_empty(&self) -> bool {
        self.size.width() <= 0 || self.size.height() <= 0
    }

    pub fn translated(&self, delta: Delta) -> Rectangle {
        Rectangle::new(self.position + delta, self.size)
    }

    /// Strict overlap: rectangles sharing only an edge do not intersect, and empty rectangles
    /// never intersect anything.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

impl HasCollision for Rectangle {
    fn rectangle(&self) -> Rectangle {
        *self
    }
}

/// Check whether `moving` may be displaced by `delta` without running into `obstacle`.
pub fn is_move_allowed(
    moving: &dyn HasCollision,
    obstacle: &dyn HasCollision,
    delta: Delta,
) -> bool {
    !moving.rectangle().translated(delta).has_collision(obstacle)
}
