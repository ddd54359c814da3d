//! Proximity collision detection
//!
//! Hits are plain distance checks against fixed radii; ship geometry plays
//! no part. Both passes scan in reverse index order so removals never skip
//! an element.

use glam::Vec2;

use super::state::{EntityKind, GameEvent, GamePhase, GameState};

/// True if two points are strictly closer than `radius`
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Index of the first enemy (scanning newest to oldest) within `radius` of `pos`
pub fn first_enemy_hit(state: &GameState, pos: Vec2, radius: f32) -> Option<usize> {
    (0..state.enemies.len())
        .rev()
        .find(|&j| within_radius(pos, state.enemies[j].pos, radius))
}

/// Resolve bullet/enemy hits, then enemy/player contacts.
///
/// Each player bullet kills at most one enemy per call. Every enemy touching
/// the player costs a life; there is no invulnerability window.
pub fn check_collisions(state: &mut GameState) {
    let bullet_radius = state.tuning.bullet_hit_radius;
    let player_radius = state.tuning.player_hit_radius;

    // Bullet vs enemy
    for i in (0..state.bullets.len()).rev() {
        if !state.bullets[i].is_player_bullet() {
            continue;
        }
        let Some(j) = first_enemy_hit(state, state.bullets[i].pos, bullet_radius) else {
            continue;
        };

        let bullet = state.bullets.remove(i);
        state.events.push(GameEvent::Despawned {
            kind: EntityKind::Bullet,
            id: bullet.id,
        });

        let enemy = &mut state.enemies[j];
        enemy.health = enemy.health.saturating_sub(1);
        if enemy.health == 0 {
            let enemy = state.enemies.remove(j);
            state.spawn_explosion(enemy.pos);
            state.events.push(GameEvent::Despawned {
                kind: EntityKind::Enemy,
                id: enemy.id,
            });
            let points = state.tuning.kill_score;
            state.add_score(points);
            log::debug!("Bullet {} destroyed enemy {}", bullet.id, enemy.id);
        }
    }

    // Enemy vs player
    let player_pos = state.player.pos;
    for i in (0..state.enemies.len()).rev() {
        if !within_radius(player_pos, state.enemies[i].pos, player_radius) {
            continue;
        }
        let enemy = state.enemies.remove(i);
        state.spawn_explosion(enemy.pos);
        state.events.push(GameEvent::Despawned {
            kind: EntityKind::Enemy,
            id: enemy.id,
        });
        log::debug!("Enemy {} rammed the player", enemy.id);
        if state.phase == GamePhase::Playing {
            state.lose_life();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;
    use crate::sim::state::BulletOwner;
    use crate::tuning::Tuning;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1, Tuning::default(), Arena::default());
        state.start_game();
        state.drain_events();
        state
    }

    #[test]
    fn test_within_radius_is_strict() {
        assert!(within_radius(Vec2::ZERO, Vec2::new(19.0, 0.0), 20.0));
        assert!(!within_radius(Vec2::ZERO, Vec2::new(20.0, 0.0), 20.0));
    }

    #[test]
    fn test_bullet_kills_enemy() {
        let mut state = playing_state();
        state.spawn_enemy_at(Vec2::new(0.0, 100.0), Vec2::ZERO);
        state.spawn_bullet(Vec2::new(0.0, 81.0), BulletOwner::Player);

        check_collisions(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].pos, Vec2::new(0.0, 100.0));
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_one_bullet_one_kill() {
        let mut state = playing_state();
        let older = state.spawn_enemy_at(Vec2::new(-5.0, 100.0), Vec2::ZERO);
        state.spawn_enemy_at(Vec2::new(5.0, 100.0), Vec2::ZERO);
        state.spawn_bullet(Vec2::new(0.0, 100.0), BulletOwner::Player);

        check_collisions(&mut state);

        assert_eq!(state.enemies.len(), 1);
        // Newest enemy is scanned first and takes the hit
        assert_eq!(state.enemies[0].id, older);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_enemy_bullets_never_collide() {
        let mut state = playing_state();
        state.spawn_enemy_at(Vec2::new(0.0, 100.0), Vec2::ZERO);
        state.spawn_bullet(Vec2::new(0.0, 100.0), BulletOwner::Enemy);

        check_collisions(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_multiple_rams_same_tick() {
        let mut state = playing_state();
        let p = state.player.pos;
        state.spawn_enemy_at(p + Vec2::new(10.0, 0.0), Vec2::ZERO);
        state.spawn_enemy_at(p - Vec2::new(10.0, 0.0), Vec2::ZERO);
        state.spawn_enemy_at(p + Vec2::new(0.0, 200.0), Vec2::ZERO);

        check_collisions(&mut state);

        assert_eq!(state.lives, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.explosions.len(), 2);
    }

    #[test]
    fn test_ram_on_last_life_ends_game() {
        let mut state = playing_state();
        state.lives = 1;
        let p = state.player.pos;
        state.spawn_enemy_at(p, Vec2::ZERO);

        check_collisions(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
    }
}
