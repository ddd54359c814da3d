//! Ambient starfield
//!
//! Purely visual. Runs in every phase and draws from its own RNG so the
//! gameplay stream is never perturbed by it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Arena;

/// Stream offset so the starfield never shares a sequence with gameplay
const STARFIELD_STREAM: u64 = 0x5eed_57a7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Units fallen per tick
    pub speed: f32,
}

/// Scrolling field of stars covering twice the arena in each direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starfield {
    rng: Pcg32,
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new(seed: u64, count: usize, arena: &Arena) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ STARFIELD_STREAM);
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(-1.0f32..1.0) * arena.width(),
                    rng.random_range(-1.0f32..1.0) * arena.height(),
                ),
                radius: rng.random_range(0.5f32..2.5),
                opacity: rng.random_range(0.3f32..1.0),
                speed: rng.random_range(0.5f32..2.5),
            })
            .collect();
        Self { rng, stars }
    }

    /// Scroll every star down; stars that fall off wrap back to the top
    pub fn update(&mut self, arena: &Arena) {
        for star in &mut self.stars {
            star.pos.y -= star.speed;
            if star.pos.y < -arena.height() {
                star.pos.y = arena.height();
                star.pos.x = self.rng.random_range(-1.0f32..1.0) * arena.width();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_bounds() {
        let arena = Arena::default();
        let field = Starfield::new(3, 200, &arena);
        assert_eq!(field.stars.len(), 200);
        for star in &field.stars {
            assert!(star.pos.x.abs() <= 800.0);
            assert!(star.pos.y.abs() <= 600.0);
            assert!((0.5..2.5).contains(&star.radius));
            assert!((0.3..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_stars_wrap_to_top() {
        let arena = Arena::default();
        let mut field = Starfield::new(3, 1, &arena);
        field.stars[0].pos.y = -599.5;
        field.stars[0].speed = 1.0;

        field.update(&arena);

        assert_eq!(field.stars[0].pos.y, 600.0);
        assert!(field.stars[0].pos.x.abs() <= 800.0);
    }

    #[test]
    fn test_same_seed_same_sky() {
        let arena = Arena::default();
        let a = Starfield::new(11, 50, &arena);
        let b = Starfield::new(11, 50, &arena);
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!(sa.pos, sb.pos);
        }
    }
}
