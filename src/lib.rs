//! Archer - a minimal real-time archery arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, trajectories, collisions, round state)
//! - `input`: Discrete input events folded into per-tick commands
//! - `render`: Frame snapshots consumed by the presentation layer
//! - `config`: Immutable per-round configuration

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::RoundConfig;

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep (24 Hz, matching the render cadence)
    pub const SIM_DT: f32 = 1.0 / 24.0;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 1000.0;
    pub const PLAY_HEIGHT: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 200.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SPEED: f32 = 7.0;

    /// Arrow defaults
    pub const ARROW_WIDTH: f32 = 30.0;
    pub const ARROW_HEIGHT: f32 = 100.0;
    pub const ARROW_SPEED: f32 = 40.0;
    /// Arrow spawn point: this far left of the player's right edge...
    pub const MUZZLE_INSET: f32 = 15.0;
    /// ...and this far above the player's vertical center
    pub const MUZZLE_RISE: f32 = 100.0;

    /// Target defaults
    pub const TARGET_SIZE: f32 = 80.0;
    pub const TARGET_SPEED: f32 = 5.0;
    /// Fixed patrol rows (y positions, one target per row)
    pub const TARGET_ROWS: [f32; 2] = [60.0, 160.0];
    /// Spawn/relocate x range margins from the play-area edges
    pub const SPAWN_MARGIN_LEFT: f32 = 20.0;
    pub const SPAWN_MARGIN_RIGHT: f32 = 100.0;
    /// Patrol reversal jitter: one chance in this many per tick
    pub const JITTER_ONE_IN: u32 = 20;

    /// Round limits
    pub const TIME_LIMIT_SECS: f32 = 10.0;
    pub const SCORE_LIMIT: u32 = 20;

    /// End screen ignores restart input for this long (seconds)
    pub const RESTART_DELAY_SECS: f32 = 2.5;
}
