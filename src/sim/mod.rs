//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame callback, fixed phase order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod state;
pub mod tick;

pub use collision::resolve;
pub use particle::Particle;
pub use state::{Ball, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
