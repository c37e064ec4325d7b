//! Translation of held direction keys into a per-tick displacement.

use super::{Delta, Direction};

/// Displacement per tick and axis while a direction key is held.
pub const STEP: i32 = 5;

/// Both axes are set independently. A press overwrites the displacement of its axis, a release
/// of either key of an axis stops movement along that axis.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Steering {
    dx: i32,
    dy: i32,
}

impl Steering {
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.dx = -STEP,
            Direction::Right => self.dx = STEP,
            Direction::Up => self.dy = -STEP,
            Direction::Down => self.dy = STEP,
        }
    }

    pub fn release(&mut self, direction: Direction) {
        match direction {
            Direction::Left | Direction::Right => self.dx = 0,
            Direction::Up | Direction::Down => self.dy = 0,
        }
    }

    pub fn delta(&self) -> Delta {
        Delta::new(self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_steering_idle() {
        assert_eq!(Steering::default().delta(), Delta::ZERO);
    }

    #[rstest]
    #[case::left(Direction::Left, Delta::new(-5, 0))]
    #[case::right(Direction::Right, Delta::new(5, 0))]
    #[case::up(Direction::Up, Delta::new(0, -5))]
    #[case::down(Direction::Down, Delta::new(0, 5))]
    fn test_steering_press(#[case] direction: Direction, #[case] expected: Delta) {
        let mut steering = Steering::default();
        steering.press(direction);
        assert_eq!(steering.delta(), expected);
        // Held keys keep their displacement.
        assert_eq!(steering.delta(), expected);
    }

    #[test]
    fn test_steering_axes_are_independent() {
        let mut steering = Steering::default();
        steering.press(Direction::Right);
        steering.press(Direction::Up);
        assert_eq!(steering.delta(), Delta::new(5, -5));
        steering.release(Direction::Up);
        assert_eq!(steering.delta(), Delta::new(5, 0));
    }

    #[test]
    fn test_steering_last_press_wins() {
        let mut steering = Steering::default();
        steering.press(Direction::Left);
        steering.press(Direction::Right);
        assert_eq!(steering.delta(), Delta::new(5, 0));
    }

    #[test]
    fn test_steering_release_stops_axis() {
        let mut steering = Steering::default();
        steering.press(Direction::Left);
        steering.press(Direction::Right);
        // Releasing the key pressed first still stops the axis.
        steering.release(Direction::Left);
        assert_eq!(steering.delta(), Delta::ZERO);
    }
}
