//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one frame. Step order is
//! fixed: player, bullets, enemies, explosions, collisions, spawning.

use glam::Vec2;

use super::collision::check_collisions;
use super::input::TickInput;
use super::state::{BulletOwner, EntityKind, GameEvent, GamePhase, GameState};
use crate::consts::PLAYER_TILT;

/// Advance the session by one frame.
///
/// Outside `Playing` this does nothing. If the game ends part way through,
/// the remaining steps are skipped on purpose, so nothing after the losing
/// step (explosions, collisions, spawning) runs on that tick.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    update_player(state, input);
    update_bullets(state);
    update_enemies(state);
    if state.phase != GamePhase::Playing {
        return;
    }
    update_explosions(state);
    check_collisions(state);
    if state.phase != GamePhase::Playing {
        return;
    }
    spawn_enemies(state, now_ms);
}

/// Fire a player bullet if the cooldown has elapsed. Returns whether it fired.
pub fn shoot(state: &mut GameState, now_ms: u64) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let cooldown = state.tuning.shot_cooldown_ms;
    if state
        .last_shot_ms
        .is_some_and(|last| now_ms.saturating_sub(last) < cooldown)
    {
        return false;
    }

    let pos = state.player.pos + Vec2::new(0.0, state.tuning.bullet_spawn_offset);
    state.spawn_bullet(pos, BulletOwner::Player);
    state.last_shot_ms = Some(now_ms);
    true
}

/// Move the ship one step per held direction and keep it inside the arena
pub fn update_player(state: &mut GameState, input: &TickInput) {
    let speed = state.tuning.player_speed;
    let dir = Vec2::new(input.horizontal() as f32, input.vertical() as f32);

    let player = &mut state.player;
    player.pos = state
        .arena
        .clamp_inset(player.pos + dir * speed, state.tuning.edge_inset);
    player.tilt = -(input.horizontal() as f32) * PLAYER_TILT;
}

/// Advance bullets and cull the ones that left the arena
pub fn update_bullets(state: &mut GameState) {
    let margin = state.tuning.cull_margin;
    for i in (0..state.bullets.len()).rev() {
        let bullet = &mut state.bullets[i];
        bullet.pos.y += bullet.vel_y();

        if state.arena.outside_y(bullet.pos.y, margin) {
            let bullet = state.bullets.remove(i);
            state.events.push(GameEvent::Despawned {
                kind: EntityKind::Bullet,
                id: bullet.id,
            });
        }
    }
}

/// Advance enemies, bounce them off the side walls and charge a life for
/// every one that slips past the bottom
pub fn update_enemies(state: &mut GameState) {
    let inset = state.tuning.edge_inset;
    let bottom = -state.arena.half_height() - state.tuning.cull_margin;

    for i in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[i];
        enemy.pos += enemy.vel;

        // Soft bounce: flip direction but leave the overshoot in place
        if state.arena.outside_x(enemy.pos.x, inset) {
            enemy.vel.x = -enemy.vel.x;
        }

        if enemy.pos.y < bottom {
            let enemy = state.enemies.remove(i);
            state.events.push(GameEvent::Despawned {
                kind: EntityKind::Enemy,
                id: enemy.id,
            });
            log::debug!("Enemy {} escaped", enemy.id);
            state.lose_life();
        }
    }
}

/// Grow and fade explosions, dropping the spent ones
pub fn update_explosions(state: &mut GameState) {
    let growth = state.tuning.explosion_growth;
    for i in (0..state.explosions.len()).rev() {
        let explosion = &mut state.explosions[i];
        explosion.scale += growth;
        explosion.life -= explosion.decay;

        if explosion.life <= 0.0 {
            let explosion = state.explosions.remove(i);
            state.events.push(GameEvent::Despawned {
                kind: EntityKind::Explosion,
                id: explosion.id,
            });
        }
    }
}

/// Spawn one enemy once the interval has passed, then tighten the interval.
///
/// A fresh session has no spawn on record, so the first playing tick spawns.
pub fn spawn_enemies(state: &mut GameState, now_ms: u64) {
    let interval = state.spawn_interval_ms;
    if state
        .last_spawn_ms
        .is_some_and(|last| now_ms.saturating_sub(last) <= interval)
    {
        return;
    }

    state.spawn_random_enemy();
    state.last_spawn_ms = Some(now_ms);
    state.spawn_interval_ms = state
        .spawn_interval_ms
        .saturating_sub(state.tuning.spawn_interval_step_ms)
        .max(state.tuning.spawn_interval_min_ms);
}
