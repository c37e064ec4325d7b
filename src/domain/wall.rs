//! Static walls.

use super::{HasCollision, Position, Rectangle, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    rectangle: Rectangle,
}

impl Wall {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            rectangle: Rectangle::new(position, size),
        }
    }
}

impl HasCollision for Wall {
    fn rectangle(&self) -> Rectangle {
        self.rectangle
    }
}
