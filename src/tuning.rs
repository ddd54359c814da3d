//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from here. Defaults
//! match `crate::consts`; a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Units moved per tick per held direction
    pub player_speed: f32,
    /// Inset from the arena edges for player clamping and enemy bounce
    pub edge_inset: f32,
    /// Player start height above the bottom edge
    pub player_start_offset: f32,
    /// Starting lives
    pub start_lives: u32,

    // === Shooting ===
    pub shot_cooldown_ms: u64,
    pub bullet_spawn_offset: f32,
    pub player_bullet_speed: f32,
    /// Magnitude only; enemy bullets always travel downward
    pub enemy_bullet_speed: f32,
    /// Distance beyond the top/bottom edges at which entities are culled
    pub cull_margin: f32,

    // === Enemies ===
    pub spawn_interval_start_ms: u64,
    pub spawn_interval_step_ms: u64,
    pub spawn_interval_min_ms: u64,
    pub spawn_margin: f32,
    pub enemy_health: u32,

    // === Collisions & scoring ===
    pub bullet_hit_radius: f32,
    pub player_hit_radius: f32,
    pub kill_score: u64,

    // === Effects ===
    pub explosion_decay: f32,
    pub explosion_growth: f32,
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            edge_inset: EDGE_INSET,
            player_start_offset: PLAYER_START_OFFSET,
            start_lives: START_LIVES,

            shot_cooldown_ms: SHOT_COOLDOWN_MS,
            bullet_spawn_offset: BULLET_SPAWN_OFFSET,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            cull_margin: CULL_MARGIN,

            spawn_interval_start_ms: SPAWN_INTERVAL_START_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            spawn_margin: SPAWN_MARGIN,
            enemy_health: ENEMY_HEALTH,

            bullet_hit_radius: BULLET_HIT_RADIUS,
            player_hit_radius: PLAYER_HIT_RADIUS,
            kill_score: KILL_SCORE,

            explosion_decay: EXPLOSION_DECAY,
            explosion_growth: EXPLOSION_GROWTH,
            star_count: STAR_COUNT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that every value keeps the simulation well-formed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("player_bullet_speed", self.player_bullet_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("bullet_hit_radius", self.bullet_hit_radius),
            ("player_hit_radius", self.player_hit_radius),
            ("explosion_growth", self.explosion_growth),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("edge_inset", self.edge_inset),
            ("player_start_offset", self.player_start_offset),
            ("bullet_spawn_offset", self.bullet_spawn_offset),
            ("cull_margin", self.cull_margin),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(out_of_range(field, format!("must be >= 0, got {value}")));
            }
        }

        if !(self.explosion_decay > 0.0 && self.explosion_decay <= 1.0) {
            return Err(out_of_range(
                "explosion_decay",
                format!("must be in (0, 1], got {}", self.explosion_decay),
            ));
        }
        if self.spawn_interval_min_ms > self.spawn_interval_start_ms {
            return Err(out_of_range(
                "spawn_interval_min_ms",
                format!(
                    "must not exceed spawn_interval_start_ms ({} > {})",
                    self.spawn_interval_min_ms, self.spawn_interval_start_ms
                ),
            ));
        }
        if self.start_lives == 0 {
            return Err(out_of_range("start_lives", "must be at least 1".to_string()));
        }
        if self.enemy_health == 0 {
            return Err(out_of_range("enemy_health", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn out_of_range(field: &'static str, reason: String) -> ConfigError {
    log::warn!("Rejected tuning: {field} {reason}");
    ConfigError::OutOfRange { field, reason }
}
