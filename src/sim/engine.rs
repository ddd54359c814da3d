//! Session driver
//!
//! `SimulationEngine` is the one object a host holds: it owns the session
//! state and the backdrop, takes a frame's timestamp and input, and exposes
//! read-only views for rendering plus a queue of notifications.

use super::backdrop::{Star, Starfield};
use super::input::TickInput;
use super::state::{Bullet, Enemy, Explosion, GameEvent, GamePhase, GameState, Player};
use super::tick;
use crate::Arena;
use crate::tuning::Tuning;

pub struct SimulationEngine {
    state: GameState,
    starfield: Starfield,
}

impl SimulationEngine {
    /// New engine sitting at the menu
    pub fn new(seed: u64, tuning: Tuning, arena: Arena) -> Self {
        let starfield = Starfield::new(seed, tuning.star_count, &arena);
        log::info!(
            "Engine created: seed {}, arena {}x{}",
            seed,
            arena.width(),
            arena.height()
        );
        Self {
            state: GameState::new(seed, tuning, arena),
            starfield,
        }
    }

    /// Advance one frame. Only the backdrop moves outside `Playing`.
    pub fn tick(&mut self, now_ms: u64, input: &TickInput, arena: Arena) {
        self.state.arena = arena;
        self.starfield.update(&arena);
        tick::tick(&mut self.state, input, now_ms);
    }

    /// Fire if the cooldown allows; calls inside the window are dropped
    pub fn shoot(&mut self, now_ms: u64) -> bool {
        tick::shoot(&mut self.state, now_ms)
    }

    /// Begin a fresh session from any phase
    pub fn start_game(&mut self) {
        self.state.start_game();
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn game_state(&self) -> GamePhase {
        self.state.phase
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        self.state.spawn_interval_ms
    }

    pub fn arena(&self) -> &Arena {
        &self.state.arena
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.state.bullets
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.state.explosions
    }

    pub fn stars(&self) -> &[Star] {
        &self.starfield.stars
    }

    /// Full session state, for inspection
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable session state, for scripted test setups
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Take every notification raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Session state as JSON (debug dumps only; never read back)
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.state)
    }
}
