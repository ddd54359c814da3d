//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps are passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order, removals scan in reverse)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod backdrop;
pub mod collision;
pub mod engine;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::pilot_input;
pub use backdrop::{Star, Starfield};
pub use collision::{check_collisions, within_radius};
pub use engine::SimulationEngine;
pub use input::TickInput;
pub use state::{
    Bullet, BulletOwner, Enemy, EntityId, EntityKind, Explosion, GameEvent, GamePhase, GameState,
    Player,
};
pub use tick::{shoot, tick};
