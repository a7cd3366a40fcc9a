//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (owned by `RoundState`, injected at construction)
//! - Strictly sequential tick phases in a fixed order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{rects_intersect, resolve_hits};
pub use state::{Arrow, Body, Phase, Player, Rect, RoundState, Target};
pub use tick::{Steer, TickInput, tick};
pub use trajectory::{aim_angle_degrees, aim_velocity};
