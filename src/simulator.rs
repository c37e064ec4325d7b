//! Simulation of the character in the arena.
//!
//! The character is moved once per fixed tick by the displacement of the current steering,
//! unless a wall is in the way.

use bevy::prelude::*;

use crate::{
    config::GameConfig,
    domain::StepOutcome,
    resource::{ArenaRes, SteeringRes},
};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(GameConfig::DEFAULT.ticks_per_second))
            .add_systems(FixedUpdate, simulate);
    }
}

fn simulate(steering: Res<SteeringRes>, mut arena: ResMut<ArenaRes>) {
    let delta = steering.delta();

    match arena.step(delta) {
        StepOutcome::Idle => {}
        StepOutcome::Moved { turned } => {
            if turned {
                trace!("character turned {:?}", arena.character().direction());
            }
        }
        StepOutcome::Blocked => {
            debug!(
                "move by ({}, {}) from {:?} blocked",
                delta.dx(),
                delta.dy(),
                arena.character().position()
            );
        }
    }
}
