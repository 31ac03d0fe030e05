//! Game state and core simulation types
//!
//! All state for one game session lives here. Entities own their per-tick
//! update and collision logic; orchestration is in `tick` and `collision`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::config::Config;

/// Which side of the table a paddle (or winner) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human, bottom of the table, pointer-controlled
    Player,
    /// AI, top of the table
    Computer,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, toggled by the pause command
    Paused,
    /// Match decided; frozen until an explicit restart
    GameOver { winner: Side },
}

/// The ball
///
/// Vertical motion is split into a speed magnitude and a ±1 direction so the
/// paddle bounce can invert direction without touching the ramping speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Vertical speed magnitude, ramps from initial_speed_y to max_speed_y
    pub speed_y: f32,
    /// Signed horizontal speed, set by paddle hits
    pub speed_x: f32,
    /// Vertical direction, +1.0 or -1.0
    pub direction: f32,
}

impl Ball {
    pub fn new(cfg: &Config) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            speed_y: 0.0,
            speed_x: 0.0,
            direction: 1.0,
        };
        ball.reset(cfg);
        ball
    }

    /// Re-center the ball for a fresh serve
    pub fn reset(&mut self, cfg: &Config) {
        self.pos = Vec2::new(cfg.canvas.width / 2.0, cfg.canvas.height / 2.0);
        self.speed_y = cfg.ball.initial_speed_y;
        self.speed_x = 0.0;
        self.direction = 1.0;
    }

    /// Advance one tick. Horizontal motion is held back until the player has
    /// made a first input.
    pub fn advance(&mut self, player_moved: bool) {
        self.pos.y += self.speed_y * self.direction;
        if player_moved {
            self.pos.x += self.speed_x;
        }
    }

    /// Reflect off the side walls. Only reflects when the ball is moving
    /// *into* the crossed wall, so the same frame can never reflect twice.
    pub fn resolve_wall_collision(&mut self, cfg: &Config) -> bool {
        if self.pos.x < cfg.ball.radius && self.speed_x < 0.0 {
            self.speed_x = -self.speed_x;
            return true;
        }
        if self.pos.x > cfg.canvas.width - cfg.ball.radius && self.speed_x > 0.0 {
            self.speed_x = -self.speed_x;
            return true;
        }
        false
    }

    /// Attempt a paddle return. The caller has already established
    /// y-proximity; this only tests x-overlap with the paddle span.
    ///
    /// On a hit the vertical direction inverts and the horizontal speed is
    /// recomputed from the offset between ball and paddle center, giving
    /// angled returns. The vertical speed ramp is gated on `player_moved`.
    pub fn resolve_paddle_collision(
        &mut self,
        paddle: &Paddle,
        player_moved: bool,
        cfg: &Config,
    ) -> bool {
        if self.pos.x < paddle.x || self.pos.x > paddle.x + cfg.paddle.width {
            return false;
        }

        if player_moved {
            self.speed_y = (self.speed_y + cfg.ball.speed_increment).min(cfg.ball.max_speed_y);
        }
        self.direction = -self.direction;

        let hit_offset = self.pos.x - (paddle.x + cfg.paddle.width / 2.0);
        self.speed_x = hit_offset * cfg.ball.trajectory_multiplier;

        true
    }
}

/// A paddle, player or computer
///
/// One type for both sides; the `side` discriminant picks the fixed
/// y-coordinate at construction and decides whether the AI applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    /// Fixed, derived from side and table height at construction
    pub y: f32,
    /// AI tracking speed; only meaningful for the computer side
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, cfg: &Config) -> Self {
        let y = match side {
            Side::Player => cfg.player_paddle_y(),
            Side::Computer => cfg.computer_paddle_y(),
        };
        Self {
            side,
            x: (cfg.canvas.width - cfg.paddle.width) / 2.0,
            y,
            speed: cfg.computer.initial_speed,
        }
    }

    /// Back to horizontal center with the initial AI speed. Resetting the
    /// speed is a no-op for the player side but harmless.
    pub fn reset(&mut self, cfg: &Config) {
        self.x = (cfg.canvas.width - cfg.paddle.width) / 2.0;
        self.speed = cfg.computer.initial_speed;
    }

    /// Set x directly from pointer input, clamped to the table
    pub fn move_to(&mut self, target_x: f32, cfg: &Config) {
        self.x = target_x.clamp(0.0, cfg.max_paddle_x());
    }

    /// Track the ball with bounded speed and a dead-zone
    ///
    /// Dormant until the player's first input, matching the ball's fairness
    /// rule. The per-tick step is clamped to `speed`, which bounds the AI
    /// reaction rate; the dead-zone prevents jitter around the target.
    pub fn update_ai(&mut self, ball_x: f32, player_moved: bool, cfg: &Config) {
        if !player_moved {
            return;
        }

        let target_x = ball_x - cfg.paddle.width / 2.0;
        let center = self.x + cfg.paddle.width / 2.0;
        let diff = target_x - center;

        if diff.abs() > cfg.computer.error_margin {
            if diff > 0.0 {
                self.x += self.speed.min(diff);
            } else {
                self.x += (-self.speed).max(diff);
            }
        }

        self.x = self.x.clamp(0.0, cfg.max_paddle_x());
    }

    /// Ramp the AI speed after a successful computer return
    pub fn increase_speed(&mut self, cfg: &Config) {
        self.speed = (self.speed + cfg.computer.speed_increment).min(cfg.computer.max_speed);
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }
}

/// Complete session state
///
/// Created once at startup and fully reinitialized by `reset`. The RNG is
/// seeded at construction so particle bursts are reproducible in tests.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub seed: u64,
    pub ball: Ball,
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    pub score: Score,
    pub phase: GamePhase,
    /// Sticky: set on the first pointer input, cleared only by reset
    pub player_moved: bool,
    /// Transient burst particles, compacted after each aging pass
    pub particles: Vec<Particle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            config,
            seed,
            ball: Ball::new(&config),
            player_paddle: Paddle::new(Side::Player, &config),
            computer_paddle: Paddle::new(Side::Computer, &config),
            score: Score::default(),
            phase: GamePhase::Playing,
            player_moved: false,
            particles: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full session reinitialization (the restart command)
    ///
    /// Reseeds the RNG from the session seed, so two consecutive resets
    /// produce identical initial states.
    pub fn reset(&mut self) {
        let cfg = self.config;
        self.ball.reset(&cfg);
        self.player_paddle.reset(&cfg);
        self.computer_paddle.reset(&cfg);
        self.score = Score::default();
        self.phase = GamePhase::Playing;
        self.player_moved = false;
        self.particles.clear();
        self.time_ticks = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Spawn a burst of particles at a collision point
    pub fn spawn_burst(&mut self, pos: Vec2) {
        for _ in 0..self.config.particles.count {
            self.particles
                .push(Particle::spawn(pos, &mut self.rng, &self.config.particles));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn test_ball_reset_centers() {
        let cfg = cfg();
        let mut ball = Ball::new(&cfg);
        ball.pos = Vec2::new(10.0, 10.0);
        ball.speed_y = 5.0;
        ball.speed_x = -2.0;
        ball.direction = -1.0;

        ball.reset(&cfg);
        assert_eq!(ball.pos, Vec2::new(250.0, 350.0));
        assert_eq!(ball.speed_y, cfg.ball.initial_speed_y);
        assert_eq!(ball.speed_x, 0.0);
        assert_eq!(ball.direction, 1.0);
    }

    #[test]
    fn test_ball_holds_horizontal_until_player_moves() {
        let cfg = cfg();
        let mut ball = Ball::new(&cfg);
        ball.speed_x = 2.0;

        ball.advance(false);
        assert_eq!(ball.pos.x, 250.0);

        ball.advance(true);
        assert_eq!(ball.pos.x, 252.0);
    }

    #[test]
    fn test_wall_reflects_only_when_moving_in() {
        let cfg = cfg();
        let mut ball = Ball::new(&cfg);

        // At the left bound but moving right: no reflection
        ball.pos.x = 2.0;
        ball.speed_x = 1.0;
        assert!(!ball.resolve_wall_collision(&cfg));
        assert_eq!(ball.speed_x, 1.0);

        // Moving left: reflect
        ball.speed_x = -1.0;
        assert!(ball.resolve_wall_collision(&cfg));
        assert_eq!(ball.speed_x, 1.0);
    }

    #[test]
    fn test_centered_paddle_hit_zeroes_horizontal_speed() {
        let cfg = cfg();
        let mut ball = Ball::new(&cfg);
        ball.pos.x = 250.0;
        let mut paddle = Paddle::new(Side::Player, &cfg);
        paddle.x = 225.0; // spans 225..275, ball dead center

        assert!(ball.resolve_paddle_collision(&paddle, true, &cfg));
        assert_eq!(ball.direction, -1.0);
        assert_eq!(ball.speed_x, 0.0);
    }

    #[test]
    fn test_paddle_hit_speed_ramp_respects_fairness_and_cap() {
        let cfg = cfg();
        let mut ball = Ball::new(&cfg);
        ball.pos.x = 250.0;
        let mut paddle = Paddle::new(Side::Player, &cfg);
        paddle.x = 225.0;

        // Before the player has moved the speed must not ramp
        ball.resolve_paddle_collision(&paddle, false, &cfg);
        assert_eq!(ball.speed_y, cfg.ball.initial_speed_y);

        // Repeated hits ramp monotonically up to the cap and no further
        let mut last = ball.speed_y;
        for _ in 0..5 {
            ball.resolve_paddle_collision(&paddle, true, &cfg);
            assert!(ball.speed_y >= last);
            assert!(ball.speed_y <= cfg.ball.max_speed_y);
            last = ball.speed_y;
        }
        assert_eq!(ball.speed_y, cfg.ball.max_speed_y);
    }

    #[test]
    fn test_paddle_sides_fix_y() {
        let cfg = cfg();
        let player = Paddle::new(Side::Player, &cfg);
        let computer = Paddle::new(Side::Computer, &cfg);
        assert_eq!(player.y, 680.0);
        assert_eq!(computer.y, 10.0);
    }

    #[test]
    fn test_ai_dormant_before_first_input() {
        let cfg = cfg();
        let mut paddle = Paddle::new(Side::Computer, &cfg);
        let x_before = paddle.x;
        paddle.update_ai(0.0, false, &cfg);
        assert_eq!(paddle.x, x_before);
    }

    #[test]
    fn test_ai_dead_zone_suppresses_jitter() {
        let cfg = cfg();
        let mut paddle = Paddle::new(Side::Computer, &cfg);
        // The AI's equilibrium offsets the target by half a width; 3px past
        // it is inside the 5px error margin, so no adjustment happens
        let ball_x = paddle.x + cfg.paddle.width + 3.0;
        paddle.update_ai(ball_x, true, &cfg);
        assert_eq!(paddle.x, 225.0);
    }

    #[test]
    fn test_ai_step_bounded_by_speed() {
        let cfg = cfg();
        let mut paddle = Paddle::new(Side::Computer, &cfg);
        let start = paddle.x;

        // Ball far to the right: one tick moves at most `speed`
        paddle.update_ai(480.0, true, &cfg);
        assert_eq!(paddle.x, start + cfg.computer.initial_speed);

        // With a speed larger than the remaining distance the AI lands on
        // the target instead of overshooting
        let mut cfg = cfg;
        cfg.computer.initial_speed = 10.0;
        let mut paddle = Paddle::new(Side::Computer, &cfg);
        paddle.update_ai(paddle.x + cfg.paddle.width - 7.0, true, &cfg);
        assert_eq!(paddle.x, start - 7.0);
    }

    #[test]
    fn test_ai_speed_caps() {
        let cfg = cfg();
        let mut paddle = Paddle::new(Side::Computer, &cfg);
        let mut last = paddle.speed;
        for _ in 0..10 {
            paddle.increase_speed(&cfg);
            assert!(paddle.speed >= last);
            assert!(paddle.speed <= cfg.computer.max_speed);
            last = paddle.speed;
        }
        assert_eq!(paddle.speed, cfg.computer.max_speed);
    }

    proptest! {
        #[test]
        fn prop_move_to_clamps(target in -1000.0f32..2000.0) {
            let cfg = cfg();
            let mut paddle = Paddle::new(Side::Player, &cfg);
            paddle.move_to(target, &cfg);
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x <= cfg.max_paddle_x());
        }

        #[test]
        fn prop_ai_stays_on_table(start in 0.0f32..450.0, ball_x in -100.0f32..600.0) {
            let cfg = cfg();
            let mut paddle = Paddle::new(Side::Computer, &cfg);
            paddle.x = start;
            paddle.update_ai(ball_x, true, &cfg);
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x <= cfg.max_paddle_x());
        }
    }
}
