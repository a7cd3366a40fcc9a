//! Frame snapshots for the presentation layer
//!
//! The simulation knows nothing about pixels. Each tick the caller composes
//! a `Frame`: an ordered sprite draw list over opaque texture handles plus
//! the HUD values. The presentation collaborator scales each texture to the
//! sprite's own size; there is no pixel contract here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Phase, RoundState};

/// Opaque handles for the fixed texture set, resolved by the asset
/// collaborator by logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureId {
    Background,
    Player,
    Target,
    Arrow,
    VictoryBanner,
    DefeatBanner,
}

/// One draw command: texture scaled to `size` at `pos`, rotated `angle_deg`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture: TextureId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Counter-clockwise degrees; only the player rotates (toward pointer)
    pub angle_deg: f32,
}

impl Sprite {
    fn upright(texture: TextureId, pos: Vec2, size: Vec2) -> Self {
        Self {
            texture,
            pos,
            size,
            angle_deg: 0.0,
        }
    }
}

/// Score and clock readouts drawn over the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub score_limit: u32,
    /// Whole seconds left on the round clock
    pub remaining_secs: u32,
}

/// Final stat shown on the end screen: elapsed time on victory, score on
/// defeat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EndStat {
    TimeSecs(f32),
    Score(u32),
}

/// One renderable frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Back-to-front draw order
    pub sprites: Vec<Sprite>,
    /// Present during a running round
    pub hud: Option<Hud>,
    /// Present on the end screen
    pub end_stat: Option<EndStat>,
}

impl Frame {
    /// Snapshot a running round: background, arrows, player (rotated toward
    /// the pointer), targets, HUD.
    pub fn compose(state: &RoundState, pointer: Vec2) -> Self {
        let play_size = Vec2::new(state.config.play_width, state.config.play_height);
        let mut sprites = Vec::with_capacity(2 + state.arrows.len() + state.targets.len());

        sprites.push(Sprite::upright(TextureId::Background, Vec2::ZERO, play_size));
        for arrow in &state.arrows {
            sprites.push(Sprite::upright(
                TextureId::Arrow,
                arrow.body.pos,
                arrow.body.size,
            ));
        }
        sprites.push(Sprite {
            texture: TextureId::Player,
            pos: state.player.body.pos,
            size: state.player.body.size,
            angle_deg: state.player.aim_angle(pointer),
        });
        for target in &state.targets {
            sprites.push(Sprite::upright(
                TextureId::Target,
                target.body.pos,
                target.body.size,
            ));
        }

        Self {
            sprites,
            hud: Some(Hud {
                score: state.score,
                score_limit: state.config.score_limit,
                remaining_secs: state.remaining_secs(),
            }),
            end_stat: None,
        }
    }

    /// Snapshot the end screen: full-area banner plus the final stat.
    ///
    /// Calling this for a round still in `Running` is a caller bug; the
    /// frame falls back to the defeat banner with the current score.
    pub fn end_screen(state: &RoundState) -> Self {
        let play_size = Vec2::new(state.config.play_width, state.config.play_height);
        let (texture, stat) = match state.phase {
            Phase::Victory => (
                TextureId::VictoryBanner,
                EndStat::TimeSecs(state.elapsed_secs),
            ),
            Phase::Defeat | Phase::Running => (TextureId::DefeatBanner, EndStat::Score(state.score)),
        };

        Self {
            sprites: vec![Sprite::upright(texture, Vec2::ZERO, play_size)],
            hud: None,
            end_stat: Some(stat),
        }
    }
}
