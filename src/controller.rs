//! Controller steering the character.
//!
//! The arrow keys set the displacement per axis. It persists while the key is held and is reset
//! when a key of the same axis is released.

use bevy::prelude::*;

use crate::{domain::Direction, resource::SteeringRes};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<SteeringRes>()
            .add_systems(Update, control);
    }
}

/// A key tapped within a single frame is both just pressed and just released, so releases are
/// applied last.
fn control(keys: Res<ButtonInput<KeyCode>>, mut steering: ResMut<SteeringRes>) {
    for direction in keys.get_just_pressed().filter_map(|k| to_direction(*k)) {
        steering.press(direction);
    }

    for direction in keys.get_just_released().filter_map(|k| to_direction(*k)) {
        steering.release(direction);
    }
}

fn to_direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Delta;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(Controller);
        app
    }

    fn delta(app: &App) -> Delta {
        app.world.resource::<SteeringRes>().delta()
    }

    #[test]
    fn test_controller_holds_axis_until_release() {
        let mut app = app();

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();
        assert_eq!(delta(&app), Delta::new(5, 0));

        // Still held, nothing new this frame.
        app.world.resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert_eq!(delta(&app), Delta::new(5, 0));

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ArrowRight);
        app.update();
        assert_eq!(delta(&app), Delta::ZERO);
    }

    #[test]
    fn test_controller_tap_within_one_frame_stops() {
        let mut app = app();

        let mut keys = app.world.resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::ArrowRight);
        keys.release(KeyCode::ArrowRight);
        app.update();
        assert_eq!(delta(&app), Delta::ZERO);

        app.world.resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert_eq!(delta(&app), Delta::ZERO);
    }

    #[test]
    fn test_controller_tap_keeps_other_axis() {
        let mut app = app();

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowDown);
        app.update();

        let mut keys = app.world.resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.press(KeyCode::ArrowLeft);
        keys.release(KeyCode::ArrowLeft);
        app.update();
        assert_eq!(delta(&app), Delta::new(0, 5));
    }

    #[test]
    fn test_controller_combines_axes() {
        let mut app = app();

        let mut keys = app.world.resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowLeft);
        keys.press(KeyCode::Space);
        app.update();

        assert_eq!(delta(&app), Delta::new(-5, -5));
    }
}
