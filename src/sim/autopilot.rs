//! Demo-mode pilot
//!
//! Steers the ship underneath the most dangerous enemy (the lowest one) and
//! asks to fire once it is roughly lined up. Used for attract mode and the
//! headless demo runner.

use super::input::TickInput;
use super::state::{GamePhase, GameState};

/// Horizontal slack before the pilot stops correcting
const LINE_UP_TOLERANCE: f32 = 6.0;
/// Fire when the target is within this horizontal distance
const FIRE_WINDOW: f32 = 15.0;
/// Height above the start line the pilot cruises at
const CRUISE_HEIGHT: f32 = 60.0;

/// Choose this frame's input for the demo pilot
pub fn pilot_input(state: &GameState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::default();
    }

    let player = state.player.pos;
    let mut input = TickInput::default();

    // Lowest enemy is the closest to leaking a life
    let target = state
        .enemies
        .iter()
        .filter(|e| e.pos.y > player.y)
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(enemy) = target {
        // Lead the target by a few ticks of drift
        let aim_x = enemy.pos.x + enemy.vel.x * 8.0;
        let dx = aim_x - player.x;
        if dx > LINE_UP_TOLERANCE {
            input = input.with(TickInput::RIGHT);
        } else if dx < -LINE_UP_TOLERANCE {
            input = input.with(TickInput::LEFT);
        }
        if dx.abs() < FIRE_WINDOW {
            input = input.with(TickInput::FIRE);
        }

        // Back away if the target is about to ram us
        if enemy.pos.y - player.y < state.tuning.player_hit_radius * 2.0 {
            input = input.with(TickInput::DOWN);
        }
    }

    // Drift back to cruise height when nothing is pressing
    let cruise_y =
        -state.arena.half_height() + state.tuning.player_start_offset + CRUISE_HEIGHT;
    if !input.down() && player.y < cruise_y - LINE_UP_TOLERANCE {
        input = input.with(TickInput::UP);
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(5, Tuning::default(), Arena::default());
        state.start_game();
        state
    }

    #[test]
    fn test_idle_outside_play() {
        let state = GameState::new(5, Tuning::default(), Arena::default());
        assert_eq!(pilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_steers_toward_lowest_enemy() {
        let mut state = playing_state();
        state.spawn_enemy_at(Vec2::new(-200.0, 300.0), Vec2::ZERO);
        state.spawn_enemy_at(Vec2::new(150.0, 100.0), Vec2::ZERO);

        let input = pilot_input(&state);
        assert!(input.right());
        assert!(!input.fire());
    }

    #[test]
    fn test_fires_when_lined_up() {
        let mut state = playing_state();
        state.spawn_enemy_at(Vec2::new(3.0, 100.0), Vec2::ZERO);

        let input = pilot_input(&state);
        assert!(input.fire());
        assert_eq!(input.horizontal(), 0);
    }
}
