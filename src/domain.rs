//! The domain module encapsulates the core game rules. It defines the `Character`, `Wall` and
//! `Arena` entities, along with the rules governing movement and collisions.
//!
//! The module does not depend on Bevy, so the rules can be exercised without a window.

mod arena;
mod basis;
mod character;
mod collision;
mod steering;
mod wall;

pub use arena::{Arena, StepOutcome};
pub use basis::{ByDirection, Delta, Direction, Position, Size};
pub use character::Character;
pub use collision::{is_move_allowed, HasCollision, Rectangle};
pub use steering::Steering;
pub use wall::Wall;
