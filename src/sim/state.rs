//! Round state and core simulation types
//!
//! Entities are one positional record (`Body`) plus a small closed set of
//! behavior structs, dispatched explicitly in the tick phase. All entity
//! collections are exclusively owned by `RoundState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::trajectory::aim_velocity;
use crate::config::RoundConfig;
use crate::consts::*;

/// Axis-aligned bounding rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Positional record shared by all simulated entities
///
/// The bounding rectangle is always derived from position and size, never
/// stored or mutated independently. Width and height are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0);
        Self { pos, size }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.pos.x,
            y: self.pos.y,
            w: self.size.x,
            h: self.size.y,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The player-controlled archer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Signed horizontal speed per tick, 0 while idle
    pub x_speed: f32,
}

impl Player {
    /// Spawn at the fixed round-start position: horizontally centered, near
    /// the bottom of the play area.
    pub fn spawn(config: &RoundConfig) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let pos = Vec2::new(
            (config.play_width - size.x) / 2.0,
            config.play_height * 0.8,
        );
        Self {
            body: Body::new(pos, size),
            x_speed: 0.0,
        }
    }

    /// Set from key-down (signed speed) and key-up (zero) events
    pub fn set_x_speed(&mut self, v: f32) {
        self.x_speed = v;
    }

    /// Move horizontally, then clamp the rect inside the play area.
    ///
    /// Pure clamp, no bounce: right edge first, then left.
    pub fn advance(&mut self, play_width: f32) {
        self.body.pos.x += self.x_speed;
        if self.body.rect().right() >= play_width {
            self.body.pos.x = play_width - self.body.size.x;
        }
        if self.body.pos.x <= 0.0 {
            self.body.pos.x = 0.0;
        }
    }

    /// Facing angle toward the pointer, recomputed every tick.
    ///
    /// Presentation only; never affects the simulation.
    pub fn aim_angle(&self, pointer: Vec2) -> f32 {
        super::trajectory::aim_angle_degrees(self.body.center(), pointer)
    }

    /// Spawn an arrow aimed at the pointer, or `None` if the aim is
    /// degenerate (pointer on the muzzle).
    pub fn fire(&self, pointer: Vec2, speed: f32) -> Option<Arrow> {
        let rect = self.body.rect();
        let muzzle = Vec2::new(
            rect.right() - rect.w / 2.0 - MUZZLE_INSET,
            self.body.center().y - MUZZLE_RISE,
        );
        Arrow::spawn(muzzle, pointer, speed)
    }
}

/// A fired arrow with a constant velocity vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub body: Body,
    pub vel: Vec2,
}

impl Arrow {
    /// Velocity is fixed once at spawn, from the launch point toward the
    /// pointer at the given magnitude. Degenerate aim yields `None`.
    pub fn spawn(pos: Vec2, pointer: Vec2, speed: f32) -> Option<Self> {
        let vel = aim_velocity(pos, pointer, speed)?;
        Some(Self {
            body: Body::new(pos, Vec2::new(ARROW_WIDTH, ARROW_HEIGHT)),
            vel,
        })
    }

    pub fn advance(&mut self) {
        self.body.pos += self.vel;
    }

    /// True once the rect's top edge has left the play area upward.
    /// Checked right after the position update; removal happens same tick.
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.body.pos.y < 0.0
    }
}

/// A patrolling target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub body: Body,
    /// Signed patrol speed, fixed magnitude
    pub speed: f32,
}

impl Target {
    pub fn spawn(row_y: f32, speed: f32, config: &RoundConfig, rng: &mut Pcg32) -> Self {
        let x = rng.random_range(config.spawn_x_range());
        Self {
            body: Body::new(Vec2::new(x, row_y), Vec2::splat(TARGET_SIZE)),
            speed,
        }
    }

    /// Move horizontally; reverse on wall contact or a 1-in-20 random draw.
    ///
    /// The random reversal is a deliberate unpredictability feature. The RNG
    /// is drawn every tick so the sequence stays aligned across positions.
    pub fn advance(&mut self, play_width: f32, rng: &mut Pcg32) {
        self.body.pos.x += self.speed;
        let rect = self.body.rect();
        let jitter = rng.random_ratio(1, JITTER_ONE_IN);
        if rect.x <= 0.0 || rect.right() >= play_width || jitter {
            self.speed = -self.speed;
        }
    }

    /// Reposition after a hit: new random x, y and speed unchanged.
    pub fn relocate(&mut self, config: &RoundConfig, rng: &mut Pcg32) {
        self.body.pos.x = rng.random_range(config.spawn_x_range());
    }
}

/// Round state machine. Terminal states are absorbing within a round;
/// restart constructs a brand-new `RoundState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Victory,
    Defeat,
}

impl Phase {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// Complete round state, owned by the round controller
#[derive(Debug, Clone)]
pub struct RoundState {
    pub config: RoundConfig,
    /// Round seed for reproducibility
    pub seed: u64,
    /// All jitter, reposition, and initial placement draw from here
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed simulated time (tick-counted, not wall clock)
    pub elapsed_secs: f32,
    pub score: u32,
    pub phase: Phase,
    pub player: Player,
    /// Live arrows, in firing order
    pub arrows: Vec<Arrow>,
    /// One target per configured patrol row, never destroyed
    pub targets: Vec<Target>,
}

impl RoundState {
    /// Construct a fresh round: player at the fixed start position, one
    /// target per patrol row at a random x, everything else zeroed.
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::spawn(&config);
        let targets = config
            .target_rows
            .iter()
            .map(|&row_y| Target::spawn(row_y, config.target_speed, &config, &mut rng))
            .collect();

        Self {
            config,
            seed,
            rng,
            time_ticks: 0,
            elapsed_secs: 0.0,
            score: 0,
            phase: Phase::Running,
            player,
            arrows: Vec::new(),
            targets,
        }
    }

    /// Whole seconds left on the round clock, as shown in the HUD
    pub fn remaining_secs(&self) -> u32 {
        (self.config.time_limit_secs - self.elapsed_secs.trunc()).max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_config() -> RoundConfig {
        RoundConfig::default()
    }

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_body_rect_derived() {
        let body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 100.0));
        let rect = body.rect();
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 120.0);
        assert_eq!(body.center(), Vec2::new(25.0, 70.0));
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::spawn(&test_config());
        assert_eq!(player.body.pos, Vec2::new(400.0, 640.0));
        assert_eq!(player.x_speed, 0.0);
    }

    #[test]
    fn test_player_clamps_at_walls() {
        let config = test_config();
        let mut player = Player::spawn(&config);

        player.set_x_speed(10_000.0);
        player.advance(config.play_width);
        assert_eq!(player.body.rect().right(), config.play_width);

        player.set_x_speed(-10_000.0);
        player.advance(config.play_width);
        assert_eq!(player.body.pos.x, 0.0);
    }

    #[test]
    fn test_fire_spawns_at_muzzle() {
        let config = test_config();
        let player = Player::spawn(&config);
        let arrow = player
            .fire(Vec2::new(500.0, 100.0), config.arrow_speed)
            .unwrap();

        // Right edge minus half width minus the inset, center minus the rise
        assert_eq!(arrow.body.pos.x, 485.0);
        assert_eq!(arrow.body.pos.y, 580.0);
        assert!((arrow.vel.length() - config.arrow_speed).abs() < 1e-3);
        // Aimed upward
        assert!(arrow.vel.y < 0.0);
    }

    #[test]
    fn test_fire_rejects_degenerate_aim() {
        let config = test_config();
        let player = Player::spawn(&config);
        let muzzle = Vec2::new(485.0, 580.0);
        assert!(player.fire(muzzle, config.arrow_speed).is_none());
    }

    #[test]
    fn test_arrow_removed_when_exiting_top() {
        let mut arrow =
            Arrow::spawn(Vec2::new(100.0, 30.0), Vec2::new(100.0, -500.0), 40.0).unwrap();
        assert!(!arrow.off_screen());
        arrow.advance();
        assert!(arrow.off_screen());
    }

    #[test]
    fn test_target_reverses_at_left_wall() {
        // Boundary reversal holds regardless of the random draw
        let mut target = Target {
            body: Body::new(Vec2::new(0.0, 60.0), Vec2::splat(TARGET_SIZE)),
            speed: -5.0,
        };
        target.advance(1000.0, &mut test_rng());
        assert_eq!(target.speed, 5.0);
    }

    #[test]
    fn test_target_reverses_at_right_wall() {
        let mut target = Target {
            body: Body::new(Vec2::new(920.0, 60.0), Vec2::splat(TARGET_SIZE)),
            speed: 5.0,
        };
        target.advance(1000.0, &mut test_rng());
        assert_eq!(target.speed, -5.0);
    }

    #[test]
    fn test_relocate_range_and_invariants() {
        let config = test_config();
        let mut rng = test_rng();
        let mut target = Target::spawn(60.0, -5.0, &config, &mut rng);
        for _ in 0..100 {
            target.relocate(&config, &mut rng);
            assert!(target.body.pos.x >= 20.0);
            assert!(target.body.pos.x <= config.play_width - 100.0);
            assert_eq!(target.body.pos.y, 60.0);
            assert_eq!(target.speed, -5.0);
        }
    }

    #[test]
    fn test_round_start() {
        let state = RoundState::new(test_config(), 12345);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.targets.len(), 2);
        assert_eq!(state.targets[0].body.pos.y, 60.0);
        assert_eq!(state.targets[1].body.pos.y, 160.0);
        assert!(state.arrows.is_empty());
        for target in &state.targets {
            assert!(target.body.pos.x >= 20.0);
            assert!(target.body.pos.x <= 900.0);
        }
    }

    #[test]
    fn test_remaining_secs() {
        let mut state = RoundState::new(test_config(), 1);
        assert_eq!(state.remaining_secs(), 10);
        state.elapsed_secs = 9.99;
        assert_eq!(state.remaining_secs(), 1);
        state.elapsed_secs = 10.0;
        assert_eq!(state.remaining_secs(), 0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            speeds in prop::collection::vec(-500.0f32..500.0, 1..50),
        ) {
            let config = test_config();
            let mut player = Player::spawn(&config);
            for v in speeds {
                player.set_x_speed(v);
                player.advance(config.play_width);
                let rect = player.body.rect();
                prop_assert!(rect.x >= 0.0);
                prop_assert!(rect.right() <= config.play_width);
            }
        }
    }
}
