//! Table Pong - a mouse-controlled two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, AI, collisions, game state)
//! - `config`: Immutable table and physics parameters
//! - `render`: Canvas2D rendering (wasm only)

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use config::Config;
pub use sim::{GamePhase, GameState, Side, TickInput, tick};
