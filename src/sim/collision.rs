//! Collision detection and scoring
//!
//! Pairwise axis-aligned rectangle tests between live arrows and targets,
//! run once per tick after all positions have been updated.

use rand_pcg::Pcg32;

use super::state::{Arrow, Rect, Target};
use crate::config::RoundConfig;

/// Strict AABB overlap test; rects that merely share an edge do not collide.
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// One collision/scoring pass. Returns the number of hits scored.
///
/// Outer loop over targets, inner loop over live arrows: the first arrow
/// found intersecting a target is removed from the live set and the target
/// relocates. The inner loop then continues against the relocated rect, so
/// one arrow never scores twice and simultaneous hits on distinct targets
/// each count.
pub fn resolve_hits(
    targets: &mut [Target],
    arrows: &mut Vec<Arrow>,
    config: &RoundConfig,
    rng: &mut Pcg32,
) -> u32 {
    let mut hits = 0;
    for target in targets.iter_mut() {
        let mut i = 0;
        while i < arrows.len() {
            if rects_intersect(&arrows[i].body.rect(), &target.body.rect()) {
                arrows.remove(i);
                target.relocate(config, rng);
                hits += 1;
                log::debug!("hit: target relocated to x={}", target.body.pos.x);
            } else {
                i += 1;
            }
        }
    }
    hits
}
