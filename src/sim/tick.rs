//! Fixed timestep round tick
//!
//! Advances one round deterministically. Phase order is fixed and strictly
//! sequential: terminal check, input, targets, arrows, collision/scoring.
//! Rendering is the caller's business (see `crate::render`).

use glam::Vec2;

use super::collision::resolve_hits;
use super::state::{Phase, RoundState};

/// Horizontal steering command derived from key events.
/// `None` in `TickInput` means the key state did not change this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Halt,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position, sampled each tick (aiming)
    pub pointer: Vec2,
    /// Steering change from key-down/key-up events, if any
    pub steer: Option<Steer>,
    /// Fire an arrow (pointer button or space, one-shot)
    pub fire: bool,
    /// Demo mode - the autoplayer aims and fires
    pub demo: bool,
}

/// Advance the round by one fixed timestep.
///
/// Win/loss is evaluated first against the current score and clock, with
/// victory taking priority when both conditions hold. Terminal phases are
/// absorbing: once set, further ticks are no-ops.
pub fn tick(state: &mut RoundState, input: &TickInput, dt: f32) {
    if state.phase.is_terminal() {
        return;
    }

    if state.score >= state.config.score_limit {
        state.phase = Phase::Victory;
        log::info!(
            "victory: {} hits in {:.2}s",
            state.score,
            state.elapsed_secs
        );
        return;
    }
    if state.elapsed_secs >= state.config.time_limit_secs {
        state.phase = Phase::Defeat;
        log::info!("defeat: time up at {} hits", state.score);
        return;
    }

    let mut input = input.clone();
    if input.demo {
        drive_demo(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    state.elapsed_secs += dt;

    // Input: steering sets the held speed, fire spawns an arrow, then the
    // player advances with clamping.
    match input.steer {
        Some(Steer::Left) => state.player.set_x_speed(-state.config.player_speed),
        Some(Steer::Right) => state.player.set_x_speed(state.config.player_speed),
        Some(Steer::Halt) => state.player.set_x_speed(0.0),
        None => {}
    }
    if input.fire {
        match state.player.fire(input.pointer, state.config.arrow_speed) {
            Some(arrow) => state.arrows.push(arrow),
            None => log::debug!("fire rejected: degenerate aim vector"),
        }
    }
    state.player.advance(state.config.play_width);

    // Targets patrol
    let play_width = state.config.play_width;
    for target in &mut state.targets {
        target.advance(play_width, &mut state.rng);
    }

    // Arrows fly; off-screen arrows leave the live set the same tick
    for arrow in &mut state.arrows {
        arrow.advance();
    }
    state.arrows.retain(|a| !a.off_screen());

    // Collision/scoring pass, after all positions are updated
    let hits = resolve_hits(
        &mut state.targets,
        &mut state.arrows,
        &state.config,
        &mut state.rng,
    );
    state.score += hits;
}

/// Autoplayer for the headless demo build: track the target nearest the
/// player with the pointer, lead it slightly, and fire on a short cadence.
fn drive_demo(state: &RoundState, input: &mut TickInput) {
    let muzzle = state.player.body.center();
    let nearest = state.targets.iter().min_by(|a, b| {
        let da = (a.body.center() - muzzle).length();
        let db = (b.body.center() - muzzle).length();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(target) = nearest {
        // Lead the patrol by the arrow's estimated flight time
        let flight_ticks = (target.body.center() - muzzle).length() / state.config.arrow_speed;
        input.pointer = target.body.center() + Vec2::new(target.speed * flight_ticks, 0.0);
        input.fire = state.time_ticks % 3 == 0;
    }
}
