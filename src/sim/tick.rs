//! Per-frame simulation tick
//!
//! The single "advance one frame" entry point. Input adapters fill a
//! `TickInput` between frames; the latest sample wins. Phase order within a
//! tick is fixed: commands, player paddle, ball physics, AI, collision
//! resolution, particle aging.

use super::collision;
use super::state::{GamePhase, GameState};

/// Input sample for a single tick
///
/// `pause` and `restart` are one-shot commands; adapters clear them after
/// the tick that consumed them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in table coordinates; the paddle is centered under it
    pub target_x: Option<f32>,
    /// Toggle Playing/Paused (ignored once the match is over)
    pub pause: bool,
    /// Fully reinitialize the session
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.reset();
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver { .. } => {}
        }
        // The toggle consumes the tick; physics resumes next frame
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let cfg = state.config;
    if let Some(pointer_x) = input.target_x {
        // First pointer input arms the fairness rule for the whole session
        state.player_moved = true;
        state
            .player_paddle
            .move_to(pointer_x - cfg.paddle.width / 2.0, &cfg);
    }

    state.ball.advance(state.player_moved);
    let ball_x = state.ball.pos.x;
    state
        .computer_paddle
        .update_ai(ball_x, state.player_moved, &cfg);

    collision::resolve(state);

    // Age particles, then compact in one pass
    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::{Score, Side};
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(Config::default(), 12345)
    }

    fn pointer(x: f32) -> TickInput {
        TickInput {
            target_x: Some(x),
            ..Default::default()
        }
    }

    #[test]
    fn test_pause_freezes_and_resume_restores() {
        // Scenario D
        let mut state = new_state();
        tick(&mut state, &pointer(250.0));
        let snapshot = (state.ball, state.player_paddle, state.score);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Ticks while paused mutate nothing
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(snapshot, (state.ball, state.player_paddle, state.score));

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(snapshot, (state.ball, state.player_paddle, state.score));
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver {
            winner: Side::Computer,
        };
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(
            state.phase,
            GamePhase::GameOver {
                winner: Side::Computer
            }
        );
    }

    #[test]
    fn test_game_over_freezes_physics() {
        // Scenario C: no further mutation once the match is decided
        let mut state = new_state();
        state.player_moved = true;
        state.score = Score {
            player: 5,
            computer: 0,
        };
        state.phase = GamePhase::GameOver {
            winner: Side::Player,
        };
        let ball_before = state.ball;

        for _ in 0..60 {
            tick(&mut state, &pointer(100.0));
        }
        assert_eq!(state.ball, ball_before);
        assert_eq!(state.score.player, 5);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut state = new_state();
        for i in 0..50 {
            tick(&mut state, &pointer(200.0 + i as f32));
        }

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        let first = state.clone();
        tick(&mut state, &restart);

        assert_eq!(state.ball, first.ball);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.player_moved);
        assert!(state.particles.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(250.0, 350.0));
    }

    #[test]
    fn test_player_moved_is_sticky() {
        let mut state = new_state();
        assert!(!state.player_moved);

        tick(&mut state, &pointer(300.0));
        assert!(state.player_moved);

        // Stays set with no further pointer input
        tick(&mut state, &TickInput::default());
        assert!(state.player_moved);
    }

    #[test]
    fn test_ball_tracks_vertical_only_before_input() {
        let mut state = new_state();
        state.ball.speed_x = 2.0;
        let x_before = state.ball.pos.x;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.x, x_before);
        assert_eq!(state.ball.pos.y, 350.0 + state.config.ball.initial_speed_y);
    }

    #[test]
    fn test_particles_age_and_compact() {
        let mut state = new_state();
        state.spawn_burst(Vec2::new(250.0, 350.0));
        let count = state.particles.len();
        assert_eq!(count, state.config.particles.count as usize);

        let max_life = state.config.particles.max_life;
        for i in 1..=max_life {
            tick(&mut state, &TickInput::default());
            for p in &state.particles {
                assert_eq!(p.life, max_life - i);
            }
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut a = new_state();
        let mut b = new_state();

        let inputs = [
            pointer(250.0),
            TickInput::default(),
            pointer(100.0),
            TickInput {
                pause: true,
                ..Default::default()
            },
            TickInput {
                pause: true,
                ..Default::default()
            },
            pointer(400.0),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.score, b.score);
        assert_eq!(a.particles.len(), b.particles.len());
        assert_eq!(a.computer_paddle.x, b.computer_paddle.x);
    }
}
