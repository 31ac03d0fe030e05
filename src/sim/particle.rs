//! Collision burst particles
//!
//! Purely visual: particles never affect gameplay. They are spawned in fixed
//! bursts at collision points and aged once per tick; the session compacts
//! the collection with `retain` after the aging pass, never mid-iteration.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::ParticleConfig;

/// One burst particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks; strictly decreasing
    pub life: i32,
    /// Lifetime at spawn, for alpha fade in the renderer
    pub max_life: i32,
}

impl Particle {
    /// Spawn at a collision point with a uniformly random velocity in a
    /// symmetric range around zero.
    pub fn spawn(pos: Vec2, rng: &mut Pcg32, cfg: &ParticleConfig) -> Self {
        let vel = Vec2::new(
            (rng.random_range(0.0..1.0) - 0.5) * cfg.max_speed,
            (rng.random_range(0.0..1.0) - 0.5) * cfg.max_speed,
        );
        Self {
            pos,
            vel,
            life: cfg.max_life,
            max_life: cfg.max_life,
        }
    }

    /// Advance by velocity and burn one tick of lifetime
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Fade factor for rendering, 1.0 at spawn down to 0.0
    pub fn alpha(&self) -> f32 {
        (self.life as f32 / self.max_life as f32).max(0.0)
    }
}
