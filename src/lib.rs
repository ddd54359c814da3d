//! Space Shooter - A 2D arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Reference arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player movement per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Inset from each arena edge the player (and enemy bounce) is held to
    pub const EDGE_INSET: f32 = 20.0;
    /// Player start position, measured up from the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 50.0;
    /// Visual bank angle while strafing
    pub const PLAYER_TILT: f32 = 0.1;

    /// Minimum time between player shots
    pub const SHOT_COOLDOWN_MS: u64 = 200;
    /// Bullet spawn offset above the player
    pub const BULLET_SPAWN_OFFSET: f32 = 20.0;
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_BULLET_SPEED: f32 = 8.0;

    /// Entities are culled this far beyond the top/bottom edges
    pub const CULL_MARGIN: f32 = 50.0;

    /// Enemy spawn ramp
    pub const SPAWN_INTERVAL_START_MS: u64 = 2000;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 10;
    pub const SPAWN_INTERVAL_MIN_MS: u64 = 500;
    /// Horizontal spawn band is the arena width minus this margin
    pub const SPAWN_MARGIN: f32 = 100.0;
    pub const ENEMY_HEALTH: u32 = 1;

    /// Proximity radii for collisions
    pub const BULLET_HIT_RADIUS: f32 = 20.0;
    pub const PLAYER_HIT_RADIUS: f32 = 25.0;

    pub const KILL_SCORE: u64 = 100;
    pub const START_LIVES: u32 = 3;

    /// Explosion animation
    pub const EXPLOSION_DECAY: f32 = 0.02;
    pub const EXPLOSION_GROWTH: f32 = 0.5;
    pub const EXPLOSION_START_SCALE: f32 = 0.1;

    /// Starfield backdrop
    pub const STAR_COUNT: usize = 200;
}

/// The rectangular playfield, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: consts::ARENA_WIDTH,
            height: consts::ARENA_HEIGHT,
        }
    }
}

impl Arena {
    /// Create an arena, rejecting non-positive or non-finite sizes
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Clamp a point to the arena shrunk by `inset` on every side
    #[inline]
    pub fn clamp_inset(&self, pos: Vec2, inset: f32) -> Vec2 {
        // An inset wider than the arena pins the point to the center line
        let max = Vec2::new(self.half_width() - inset, self.half_height() - inset).max(Vec2::ZERO);
        pos.clamp(-max, max)
    }

    /// True if `x` lies outside the horizontal band shrunk by `inset`
    #[inline]
    pub fn outside_x(&self, x: f32, inset: f32) -> bool {
        x < -self.half_width() + inset || x > self.half_width() - inset
    }

    /// True if `y` lies outside the vertical band grown by `margin`
    #[inline]
    pub fn outside_y(&self, y: f32, margin: f32) -> bool {
        y < -self.half_height() - margin || y > self.half_height() + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_rejects_bad_sizes() {
        assert!(Arena::new(800.0, 600.0).is_ok());
        assert!(Arena::new(0.0, 600.0).is_err());
        assert!(Arena::new(800.0, -1.0).is_err());
        assert!(Arena::new(f32::NAN, 600.0).is_err());
        assert!(Arena::new(f32::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_clamp_inset() {
        let arena = Arena::default();
        let p = arena.clamp_inset(Vec2::new(1000.0, -1000.0), 20.0);
        assert_eq!(p, Vec2::new(380.0, -280.0));
        let q = arena.clamp_inset(Vec2::new(10.0, 10.0), 20.0);
        assert_eq!(q, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_outside_bands() {
        let arena = Arena::default();
        assert!(arena.outside_x(-381.0, 20.0));
        assert!(!arena.outside_x(380.0, 20.0));
        assert!(arena.outside_y(351.0, 50.0));
        assert!(!arena.outside_y(-350.0, 50.0));
    }
}
