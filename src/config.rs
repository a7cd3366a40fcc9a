//! Per-round configuration
//!
//! One immutable struct passed into `RoundState::new` instead of module-level
//! globals, so tests can run rounds with alternate dimensions and limits.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Play area width (simulation bounds, not pixels)
    pub play_width: f32,
    /// Play area height
    pub play_height: f32,
    /// Horizontal player speed per tick while a direction key is held
    pub player_speed: f32,
    /// Arrow velocity magnitude per tick
    pub arrow_speed: f32,
    /// Target patrol speed magnitude per tick
    pub target_speed: f32,
    /// Patrol row y positions; one target is spawned per row
    pub target_rows: Vec<f32>,
    /// Round ends in defeat once elapsed time reaches this (seconds)
    pub time_limit_secs: f32,
    /// Round ends in victory once the score reaches this
    pub score_limit: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            player_speed: PLAYER_SPEED,
            arrow_speed: ARROW_SPEED,
            target_speed: TARGET_SPEED,
            target_rows: TARGET_ROWS.to_vec(),
            time_limit_secs: TIME_LIMIT_SECS,
            score_limit: SCORE_LIMIT,
        }
    }
}

impl RoundConfig {
    /// Valid x range for target spawn and relocation
    pub fn spawn_x_range(&self) -> RangeInclusive<f32> {
        SPAWN_MARGIN_LEFT..=(self.play_width - SPAWN_MARGIN_RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let config = RoundConfig::default();
        assert_eq!(config.play_width, 1000.0);
        assert_eq!(config.score_limit, 20);
        assert_eq!(config.target_rows.len(), 2);
    }

    #[test]
    fn test_spawn_range_tracks_width() {
        let config = RoundConfig {
            play_width: 500.0,
            ..Default::default()
        };
        let range = config.spawn_x_range();
        assert_eq!(*range.start(), 20.0);
        assert_eq!(*range.end(), 400.0);
    }
}
