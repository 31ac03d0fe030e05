//! Immutable game configuration
//!
//! Every table dimension, speed, and threshold the simulation reads lives
//! here. A `Config` is built once (defaults, or defaults patched from JSON)
//! and passed into `GameState::new`; nothing mutates it afterwards, which is
//! what makes parameterized tests deterministic.

use serde::{Deserialize, Serialize};

/// Table (canvas) dimensions in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 700.0,
        }
    }
}

/// Paddle geometry, shared by both sides
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Distance of each paddle from its table edge
    pub offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 10.0,
            offset: 20.0,
        }
    }
}

/// Ball physics parameters (speeds are pixels per tick)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub initial_speed_y: f32,
    pub max_speed_y: f32,
    /// Added to the vertical speed on each player-paddle return
    pub speed_increment: f32,
    /// Converts paddle-hit offset into the new horizontal speed
    pub trajectory_multiplier: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            initial_speed_y: 3.0,
            max_speed_y: 5.0,
            speed_increment: 1.0,
            trajectory_multiplier: 0.3,
        }
    }
}

/// Computer paddle AI tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Added on each successful computer return
    pub speed_increment: f32,
    /// Dead-zone: the AI ignores target offsets smaller than this
    pub error_margin: f32,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            initial_speed: 4.0,
            max_speed: 6.0,
            speed_increment: 0.5,
            error_margin: 5.0,
        }
    }
}

/// Match rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub winning_score: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { winning_score: 5 }
    }
}

/// Collision particle bursts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles spawned per burst
    pub count: u32,
    /// Lifetime in ticks
    pub max_life: i32,
    /// Velocity components are sampled from (-max_speed/2, max_speed/2)
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_life: 30,
            max_speed: 3.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub computer: ComputerConfig,
    pub rules: RulesConfig,
    pub particles: ParticleConfig,
}

impl Config {
    /// Y of the player paddle's top edge (bottom of the table)
    pub fn player_paddle_y(&self) -> f32 {
        self.canvas.height - self.paddle.offset
    }

    /// Y of the computer paddle's top edge (top of the table)
    pub fn computer_paddle_y(&self) -> f32 {
        self.paddle.offset - self.paddle.height
    }

    /// Largest x a paddle may occupy
    pub fn max_paddle_x(&self) -> f32 {
        self.canvas.width - self.paddle.width
    }
}
