//! Collision resolution and scoring
//!
//! Runs once per tick after ball and AI advancement: wall bounce, then the
//! player side, then the computer side. For each side a paddle return and a
//! score are mutually exclusive within a tick - a miss is only recognized
//! once the ball has fully passed the table edge without registering a hit.
//!
//! Detection is a y-proximity gate plus an x-overlap test, as in the
//! original game. There is no sub-frame sweep, so a fast enough ball could
//! tunnel a paddle; max_speed_y keeps real configurations well below that.

use super::state::{GamePhase, GameState, Side};

/// Resolve all collisions and scoring for the current tick
pub fn resolve(state: &mut GameState) {
    let cfg = state.config;

    if state.ball.resolve_wall_collision(&cfg) {
        let pos = state.ball.pos;
        state.spawn_burst(pos);
    }

    // Player side (bottom edge)
    let player_zone = cfg.player_paddle_y() - cfg.paddle.height / 2.0;
    if state.ball.pos.y > player_zone {
        if state
            .ball
            .resolve_paddle_collision(&state.player_paddle, state.player_moved, &cfg)
        {
            let pos = state.ball.pos;
            state.spawn_burst(pos);
        } else if state.ball.pos.y > cfg.canvas.height {
            award_point(state, Side::Computer);
        }
    }

    // Computer side (top edge). A successful return also ramps the AI speed.
    let computer_zone = cfg.paddle.offset + cfg.paddle.height / 2.0;
    if state.ball.pos.y < computer_zone {
        if state
            .ball
            .resolve_paddle_collision(&state.computer_paddle, state.player_moved, &cfg)
        {
            // Fairness rule: the AI ramp waits for the first player input,
            // same as the ball's speed ramp
            if state.player_moved {
                state.computer_paddle.increase_speed(&cfg);
            }
            let pos = state.ball.pos;
            state.spawn_burst(pos);
        } else if state.ball.pos.y < 0.0 {
            award_point(state, Side::Player);
        }
    }
}

fn award_point(state: &mut GameState, side: Side) {
    state.score.award(side);
    state.ball.reset(&state.config);
    check_winner(state);
}

/// Transition to GameOver once either score reaches the winning threshold
fn check_winner(state: &mut GameState) {
    let target = state.config.rules.winning_score;
    if state.score.player >= target {
        state.phase = GamePhase::GameOver {
            winner: Side::Player,
        };
    } else if state.score.computer >= target {
        state.phase = GamePhase::GameOver {
            winner: Side::Computer,
        };
    }
}
