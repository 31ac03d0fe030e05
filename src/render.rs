//! Canvas2D rendering
//!
//! Read-only consumer of the simulation state: one `render` call per frame,
//! after the tick. Nothing in the core depends on rendering succeeding, so
//! fallible canvas calls are fire-and-forget.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::Config;
use crate::sim::{GamePhase, GameState, Paddle, Side};

const BACKGROUND: &str = "#000000";
const PRIMARY: &str = "#FFFFFF";
const SECONDARY: &str = "#888888";
const ACCENT: &str = "#00FF00";
const DANGER: &str = "#FF0000";
const FONT: &str = "Courier New";

/// Draws one frame of game state onto a 2D canvas context
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Render a complete frame: table, entities, score, overlays
    pub fn render(&self, state: &GameState) {
        let cfg = &state.config;
        self.clear(cfg);
        self.draw_center_line(cfg);
        self.draw_ball(state);
        self.draw_paddle(&state.player_paddle, cfg);
        self.draw_paddle(&state.computer_paddle, cfg);
        self.draw_score(state);
        self.draw_particles(state);

        match state.phase {
            GamePhase::Paused => self.draw_pause_overlay(cfg),
            GamePhase::GameOver { winner } => self.draw_game_over(winner, cfg),
            GamePhase::Playing => {}
        }
    }

    fn clear(&self, cfg: &Config) {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, cfg.canvas.width as f64, cfg.canvas.height as f64);
    }

    fn draw_center_line(&self, cfg: &Config) {
        let mid_y = cfg.canvas.height as f64 / 2.0;
        self.ctx.save();
        self.ctx.begin_path();
        let dashes = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(4.0));
        let _ = self.ctx.set_line_dash(&dashes);
        self.ctx.move_to(0.0, mid_y);
        self.ctx.line_to(cfg.canvas.width as f64, mid_y);
        self.ctx.set_stroke_style_str(SECONDARY);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn draw_ball(&self, state: &GameState) {
        let ball = &state.ball;
        self.ctx.save();
        self.ctx.set_shadow_blur(10.0);
        self.ctx.set_shadow_color(PRIMARY);
        self.ctx.set_fill_style_str(PRIMARY);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            state.config.ball.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
        self.ctx.restore();
    }

    fn draw_paddle(&self, paddle: &Paddle, cfg: &Config) {
        self.ctx.save();
        self.ctx.set_shadow_blur(5.0);
        self.ctx.set_shadow_color(PRIMARY);
        self.ctx.set_fill_style_str(PRIMARY);
        self.ctx.fill_rect(
            paddle.x as f64,
            paddle.y as f64,
            cfg.paddle.width as f64,
            cfg.paddle.height as f64,
        );
        self.ctx.restore();
    }

    fn draw_score(&self, state: &GameState) {
        let mid_y = state.config.canvas.height as f64 / 2.0;
        self.ctx.set_fill_style_str(PRIMARY);
        self.ctx.set_font(&format!("32px {FONT}"));
        let _ = self
            .ctx
            .fill_text(&state.score.player.to_string(), 20.0, mid_y + 50.0);
        let _ = self
            .ctx
            .fill_text(&state.score.computer.to_string(), 20.0, mid_y - 30.0);
    }

    fn draw_particles(&self, state: &GameState) {
        for particle in &state.particles {
            self.ctx.save();
            self.ctx.set_global_alpha(particle.alpha() as f64);
            self.ctx.set_fill_style_str(PRIMARY);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                particle.pos.x as f64,
                particle.pos.y as f64,
                2.0,
                0.0,
                TAU,
            );
            self.ctx.fill();
            self.ctx.restore();
        }
    }

    fn overlay(&self, cfg: &Config, alpha: &str) {
        self.ctx.set_fill_style_str(alpha);
        self.ctx
            .fill_rect(0.0, 0.0, cfg.canvas.width as f64, cfg.canvas.height as f64);
    }

    fn draw_pause_overlay(&self, cfg: &Config) {
        let cx = cfg.canvas.width as f64 / 2.0;
        let cy = cfg.canvas.height as f64 / 2.0;

        self.ctx.save();
        self.overlay(cfg, "rgba(0, 0, 0, 0.7)");

        self.ctx.set_fill_style_str(PRIMARY);
        self.ctx.set_font(&format!("40px {FONT}"));
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text("PAUSED", cx, cy);

        self.ctx.set_font(&format!("16px {FONT}"));
        let _ = self.ctx.fill_text("Press ESC to resume", cx, cy + 30.0);
        let _ = self.ctx.fill_text("Press R to restart", cx, cy + 50.0);

        self.ctx.set_text_align("left");
        self.ctx.restore();
    }

    fn draw_game_over(&self, winner: Side, cfg: &Config) {
        let cx = cfg.canvas.width as f64 / 2.0;
        let cy = cfg.canvas.height as f64 / 2.0;

        self.ctx.save();
        self.overlay(cfg, "rgba(0, 0, 0, 0.8)");

        let (color, text) = match winner {
            Side::Player => (ACCENT, "YOU WIN!"),
            Side::Computer => (DANGER, "COMPUTER WINS!"),
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&format!("40px {FONT}"));
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(text, cx, cy - 20.0);

        self.ctx.set_fill_style_str(PRIMARY);
        self.ctx.set_font(&format!("20px {FONT}"));
        let _ = self.ctx.fill_text("Press R to play again", cx, cy + 40.0);

        self.ctx.set_text_align("left");
        self.ctx.restore();
    }
}
