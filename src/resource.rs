//! The resource module encapsulates domain entities for use with Bevy.

use bevy::prelude::{Deref, DerefMut, Resource};

use crate::domain;

#[derive(Resource, Deref, DerefMut)]
pub struct ArenaRes(domain::Arena);

impl From<domain::Arena> for ArenaRes {
    fn from(value: domain::Arena) -> Self {
        Self(value)
    }
}

#[derive(Resource, Deref, DerefMut, Default)]
pub struct SteeringRes(domain::Steering);

impl From<domain::Steering> for SteeringRes {
    fn from(value: domain::Steering) -> Self {
        Self(value)
    }
}
