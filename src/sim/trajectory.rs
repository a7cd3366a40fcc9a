//! Vector and trajectory math
//!
//! Pure helpers shared by the fire action and the player's facing angle.

use glam::Vec2;

/// Aim points closer than this to the origin are degenerate; the direction is
/// undefined and the fire action is rejected.
pub const MIN_AIM_DISTANCE: f32 = 1e-3;

/// Velocity of magnitude `speed` pointing from `origin` toward `aim`.
///
/// Returns `None` when the two points (nearly) coincide, so callers can
/// reject the fire action instead of dividing by zero.
pub fn aim_velocity(origin: Vec2, aim: Vec2, speed: f32) -> Option<Vec2> {
    let rel = aim - origin;
    let dist = rel.length();
    if dist < MIN_AIM_DISTANCE {
        return None;
    }
    Some(rel / dist * speed)
}

/// Facing angle in degrees from `from` toward `to`.
///
/// Screen coordinates have y pointing down, so the sign is flipped: a point
/// straight above yields +90, straight right yields 0. Presentation only.
#[inline]
pub fn aim_angle_degrees(from: Vec2, to: Vec2) -> f32 {
    let rel = to - from;
    -rel.y.atan2(rel.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_aim_velocity_direction() {
        // Aim straight up (smaller y in screen coordinates)
        let vel = aim_velocity(Vec2::new(100.0, 500.0), Vec2::new(100.0, 100.0), 40.0).unwrap();
        assert!(vel.x.abs() < 1e-4);
        assert!((vel.y - (-40.0)).abs() < 1e-4);

        // Aim down-right at 45 degrees
        let vel = aim_velocity(Vec2::ZERO, Vec2::new(10.0, 10.0), 10.0).unwrap();
        assert!((vel.x - vel.y).abs() < 1e-4);
        assert!((vel.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_aim_velocity_degenerate() {
        let p = Vec2::new(42.0, 17.0);
        assert!(aim_velocity(p, p, 40.0).is_none());
        assert!(aim_velocity(p, p + Vec2::splat(1e-5), 40.0).is_none());
    }

    #[test]
    fn test_aim_angle_quadrants() {
        let origin = Vec2::new(500.0, 640.0);
        // Pointer to the right: 0 degrees
        assert!(aim_angle_degrees(origin, origin + Vec2::new(100.0, 0.0)).abs() < 1e-3);
        // Pointer straight above: +90 (y is down in screen space)
        let up = aim_angle_degrees(origin, origin + Vec2::new(0.0, -100.0));
        assert!((up - 90.0).abs() < 1e-3);
        // Pointer below: -90
        let down = aim_angle_degrees(origin, origin + Vec2::new(0.0, 100.0));
        assert!((down + 90.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_aim_velocity_magnitude(
            ox in -1000.0f32..1000.0,
            oy in -1000.0f32..1000.0,
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            speed in 0.1f32..200.0,
        ) {
            let origin = Vec2::new(ox, oy);
            let aim = Vec2::new(ax, ay);
            if let Some(vel) = aim_velocity(origin, aim, speed) {
                prop_assert!((vel.length() - speed).abs() < speed * 1e-4 + 1e-4);
                // Velocity points toward the aim point
                prop_assert!(vel.dot(aim - origin) > 0.0);
            } else {
                prop_assert!((aim - origin).length() < MIN_AIM_DISTANCE);
            }
        }
    }
}
