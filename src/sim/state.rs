//! Game state and core simulation types
//!
//! Everything a session needs to advance deterministically lives here,
//! including the RNG, so a session is a pure function of its seed, inputs
//! and timestamps.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Arena;
use crate::consts::*;
use crate::tuning::Tuning;

/// Unique id handed to every spawned entity (never reused within a state)
pub type EntityId = u32;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, only the backdrop animates
    Menu,
    /// Active gameplay
    Playing,
    /// Lives exhausted, only the backdrop animates
    GameOver,
}

/// Which kind of entity an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Enemy,
    Bullet,
    Explosion,
}

/// Notifications for the renderer and UI, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new entity needs a visual
    Spawned { kind: EntityKind, id: EntityId },
    /// An entity is gone; drop its visual
    Despawned { kind: EntityKind, id: EntityId },
    ScoreChanged(u64),
    LivesChanged(u32),
    GameStarted,
    GameOver { final_score: u64 },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Bank angle for rendering (positive when strafing left)
    pub tilt: f32,
}

impl Player {
    /// Player at the start point of the given arena
    pub fn at_start(arena: &Arena, start_offset: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, -arena.half_height() + start_offset),
            tilt: 0.0,
        }
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A projectile travelling straight up or down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: EntityId,
    pub pos: Vec2,
    /// Vertical units per tick; positive is up
    vel_y: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn new(id: EntityId, pos: Vec2, owner: BulletOwner, tuning: &Tuning) -> Self {
        let vel_y = match owner {
            BulletOwner::Player => tuning.player_bullet_speed,
            BulletOwner::Enemy => -tuning.enemy_bullet_speed,
        };
        Self {
            id,
            pos,
            vel_y,
            owner,
        }
    }

    pub fn vel_y(&self) -> f32 {
        self.vel_y
    }

    pub fn is_player_bullet(&self) -> bool {
        self.owner == BulletOwner::Player
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: u32,
}

/// A short-lived expanding blast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub id: EntityId,
    pub pos: Vec2,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f32,
    pub decay: f32,
    pub scale: f32,
}

impl Explosion {
    pub fn new(id: EntityId, pos: Vec2, decay: f32) -> Self {
        Self {
            id,
            pos,
            life: 1.0,
            decay,
            scale: EXPLOSION_START_SCALE,
        }
    }

    /// Fade for rendering
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG (enemy spawns only)
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Arena used by the last tick (and by resets)
    pub arena: Arena,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    /// Current time between enemy spawns
    pub spawn_interval_ms: u64,
    /// Timestamp of the last accepted shot this session
    pub last_shot_ms: Option<u64>,
    /// Timestamp of the last enemy spawn this session
    pub last_spawn_ms: Option<u64>,
    /// Pending notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Create a new state sitting at the menu
    pub fn new(seed: u64, tuning: Tuning, arena: Arena) -> Self {
        let player = Player::at_start(&arena, tuning.player_start_offset);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.start_lives,
            spawn_interval_ms: tuning.spawn_interval_start_ms,
            tuning,
            arena,
            phase: GamePhase::Menu,
            score: 0,
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            last_shot_ms: None,
            last_spawn_ms: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Discard the session and begin a fresh one in `Playing`
    pub fn start_game(&mut self) {
        for enemy in self.enemies.drain(..) {
            self.events.push(GameEvent::Despawned {
                kind: EntityKind::Enemy,
                id: enemy.id,
            });
        }
        for bullet in self.bullets.drain(..) {
            self.events.push(GameEvent::Despawned {
                kind: EntityKind::Bullet,
                id: bullet.id,
            });
        }
        for explosion in self.explosions.drain(..) {
            self.events.push(GameEvent::Despawned {
                kind: EntityKind::Explosion,
                id: explosion.id,
            });
        }

        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.spawn_interval_ms = self.tuning.spawn_interval_start_ms;
        self.last_shot_ms = None;
        self.last_spawn_ms = None;
        self.player = Player::at_start(&self.arena, self.tuning.player_start_offset);

        self.events.push(GameEvent::GameStarted);
        self.events.push(GameEvent::ScoreChanged(self.score));
        self.events.push(GameEvent::LivesChanged(self.lives));
        log::info!("Game started (seed {})", self.seed);
    }

    /// Spawn a bullet and announce it
    pub fn spawn_bullet(&mut self, pos: Vec2, owner: BulletOwner) -> EntityId {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, pos, owner, &self.tuning));
        self.events.push(GameEvent::Spawned {
            kind: EntityKind::Bullet,
            id,
        });
        id
    }

    /// Spawn an enemy with an explicit position and velocity
    pub fn spawn_enemy_at(&mut self, pos: Vec2, vel: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            vel,
            health: self.tuning.enemy_health,
        });
        self.events.push(GameEvent::Spawned {
            kind: EntityKind::Enemy,
            id,
        });
        id
    }

    /// Spawn an enemy just above the top edge with a random drift
    pub fn spawn_random_enemy(&mut self) -> EntityId {
        let band = (self.arena.width() - self.tuning.spawn_margin).max(0.0);
        let x = self.rng.random_range(-0.5f32..0.5) * band;
        let y = self.arena.half_height() + self.tuning.cull_margin;
        let vel = Vec2::new(
            self.rng.random_range(-1.0f32..1.0),
            self.rng.random_range(-3.0f32..-1.0),
        );
        let id = self.spawn_enemy_at(Vec2::new(x, y), vel);
        log::debug!("Spawned enemy {id} at x={x:.1} vel=({:.2}, {:.2})", vel.x, vel.y);
        id
    }

    /// Spawn an explosion and announce it
    pub fn spawn_explosion(&mut self, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.explosions
            .push(Explosion::new(id, pos, self.tuning.explosion_decay));
        self.events.push(GameEvent::Spawned {
            kind: EntityKind::Explosion,
            id,
        });
        id
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Take one life; the first time lives run out the game ends
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LivesChanged(self.lives));

        if self.lives == 0 && self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
            });
            log::info!("Game over, final score {}", self.score);
        }
    }

    /// Hand pending notifications to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(7, Tuning::default(), Arena::default())
    }

    #[test]
    fn test_new_state_at_menu() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, 3);
        assert_eq!(state.player.pos, Vec2::new(0.0, -250.0));
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_bullet_direction_follows_owner() {
        let tuning = Tuning::default();
        let up = Bullet::new(1, Vec2::ZERO, BulletOwner::Player, &tuning);
        let down = Bullet::new(2, Vec2::ZERO, BulletOwner::Enemy, &tuning);
        assert_eq!(up.vel_y(), 10.0);
        assert_eq!(down.vel_y(), -8.0);
        assert!(up.is_player_bullet());
        assert!(!down.is_player_bullet());
    }

    #[test]
    fn test_random_enemy_within_spawn_band() {
        let mut state = new_state();
        for _ in 0..500 {
            state.spawn_random_enemy();
        }
        for enemy in &state.enemies {
            assert!(enemy.pos.x.abs() <= 350.0);
            assert_eq!(enemy.pos.y, 350.0);
            assert!((-1.0..1.0).contains(&enemy.vel.x));
            assert!((-3.0..-1.0).contains(&enemy.vel.y));
            assert_eq!(enemy.health, 1);
        }
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = new_state();
        let a = state.spawn_bullet(Vec2::ZERO, BulletOwner::Player);
        let b = state.spawn_enemy_at(Vec2::ZERO, Vec2::ZERO);
        let c = state.spawn_explosion(Vec2::ZERO);
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_lose_life_ends_game_once() {
        let mut state = new_state();
        state.start_game();
        state.drain_events();
        state.lives = 1;

        state.lose_life();
        state.lose_life();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);

        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_start_game_despawns_everything() {
        let mut state = new_state();
        state.start_game();
        let enemy = state.spawn_enemy_at(Vec2::ZERO, Vec2::ZERO);
        let bullet = state.spawn_bullet(Vec2::ZERO, BulletOwner::Player);
        state.drain_events();

        state.start_game();
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Despawned {
            kind: EntityKind::Enemy,
            id: enemy
        }));
        assert!(events.contains(&GameEvent::Despawned {
            kind: EntityKind::Bullet,
            id: bullet
        }));
        assert!(events.contains(&GameEvent::GameStarted));
    }

    #[test]
    fn test_explosion_opacity_tracks_life() {
        let mut explosion = Explosion::new(1, Vec2::ZERO, 0.02);
        assert_eq!(explosion.opacity(), 1.0);
        explosion.life = -0.01;
        assert_eq!(explosion.opacity(), 0.0);
    }
}
