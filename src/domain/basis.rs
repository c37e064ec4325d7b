//! Basic building blocks.

use std::{
    ops::{Add, Neg},
    slice::Iter,
};

/// Pixel position of a top-left corner. The y-axis points down.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    fn add(self, rhs: Delta) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl From<Position> for (i32, i32) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Scale both extents by a fraction, truncating to whole pixels.
    pub fn scaled(&self, x_fraction: f64, y_fraction: f64) -> Size {
        Size::new(
            (self.width as f64 * x_fraction) as i32,
            (self.height as f64 * y_fraction) as i32,
        )
    }

    /// Point at the given fractions of the extents, truncated to whole pixels.
    pub fn fraction(&self, x_fraction: f64, y_fraction: f64) -> Position {
        let scaled = self.scaled(x_fraction, y_fraction);
        Position::new(scaled.width, scaled.height)
    }
}

/// Displacement requested for a single tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Delta {
    dx: i32,
    dy: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta::new(0, 0);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Direction of the dominant axis, `None` if neither axis dominates.
    pub fn dominant_direction(&self) -> Option<Direction> {
        let (x, y) = (self.dx.unsigned_abs(), self.dy.unsigned_abs());
        if x > y {
            Some(if self.dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else if y > x {
            Some(if self.dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            })
        } else {
            None
        }
    }
}

impl Neg for Delta {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Delta::new(-self.dx, -self.dy)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }
}

/// One value per facing direction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ByDirection<T> {
    up: T,
    down: T,
    left: T,
    right: T,
}

impl<T> ByDirection<T> {
    pub const fn new(up: T, down: T, left: T, right: T) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self::new(
            f(Direction::Up),
            f(Direction::Down),
            f(Direction::Left),
            f(Direction::Right),
        )
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        Direction::iter().map(|d| self.get(*d))
    }
}

impl<T: Clone> ByDirection<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1, 2);
        assert_eq!(position.x(), 1);
        assert_eq!(position.y(), 2);
        assert_eq!(position + Delta::new(-3, 5), Position::new(-2, 7));
    }

    #[rstest]
    #[case::character(0.1, 0.2, Size::new(80, 120))]
    #[case::wall(0.2, 0.2, Size::new(160, 120))]
    #[case::truncated(0.333, 0.333, Size::new(266, 199))]
    fn test_size_scaled(#[case] x: f64, #[case] y: f64, #[case] expected: Size) {
        assert_eq!(Size::new(800, 600).scaled(x, y), expected);
    }

    #[test]
    fn test_size_fraction() {
        assert_eq!(
            Size::new(800, 600).fraction(0.5, 0.5),
            Position::new(400, 300)
        );
    }

    #[rstest]
    #[case::right( 5,  0, Some(Direction::Right))]
    #[case::left( -5,  0, Some(Direction::Left))]
    #[case::down(  0,  5, Some(Direction::Down))]
    #[case::up(    0, -5, Some(Direction::Up))]
    #[case::mostly_right( 5, -3, Some(Direction::Right))]
    #[case::mostly_up(   -2, -7, Some(Direction::Up))]
    #[case::diagonal(     3,  3, None)]
    #[case::anti_diagonal(-5, 5, None)]
    #[case::zero(         0,  0, None)]
    fn test_delta_dominant_direction(
        #[case] dx: i32,
        #[case] dy: i32,
        #[case] expected: Option<Direction>,
    ) {
        assert_eq!(Delta::new(dx, dy).dominant_direction(), expected);
    }

    #[test]
    fn test_by_direction() {
        let names = ByDirection::from_fn(|d| format!("{d:?}"));
        for direction in Direction::iter() {
            assert_eq!(names.get(*direction), &format!("{direction:?}"));
        }
        assert_eq!(
            names.values().cloned().collect::<Vec<_>>(),
            vec!["Up", "Down", "Left", "Right"]
        );
    }
}
