//! Archer entry point
//!
//! Runs the explicit outer round loop: every restart constructs a brand-new
//! round, nothing carried over. This build is headless; the demo autoplayer
//! drives each round, and a windowed frontend would pump real OS events into
//! `InputState` where marked instead.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use archer::RoundConfig;
use archer::consts::{RESTART_DELAY_SECS, SIM_DT};
use archer::input::InputState;
use archer::render::{EndStat, Frame};
use archer::sim::{Phase, RoundState, tick};

/// Headless builds play this many demo rounds before exiting
const DEMO_ROUNDS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("Archer starting...");

    let config = RoundConfig::default();
    for round in 1..=DEMO_ROUNDS {
        let seed = time_seed();
        log::info!("Round {round} starting (seed {seed})");

        let mut events = InputState::default();
        let Some(state) = run_round(config.clone(), seed, &mut events) else {
            log::info!("Quit requested");
            return;
        };

        if !hold_end_screen(&state, &mut events) {
            log::info!("Quit requested");
            return;
        }
    }
    log::info!("Demo finished");
}

/// Run one round at 24 Hz until it reaches a terminal phase.
/// Returns `None` if a quit signal arrived mid-round.
fn run_round(config: RoundConfig, seed: u64, events: &mut InputState) -> Option<RoundState> {
    let mut state = RoundState::new(config, seed);
    let frame_budget = Duration::from_secs_f32(SIM_DT);

    while state.phase == Phase::Running {
        let frame_start = Instant::now();

        // A windowed frontend pumps OS events into `events` here.
        if events.quit_requested() {
            return None;
        }
        let mut input = events.take_tick_input();
        input.demo = true;
        tick(&mut state, &input, SIM_DT);

        // The presentation collaborator consumes this snapshot
        let frame = Frame::compose(&state, input.pointer);
        if state.time_ticks % 24 == 0 {
            if let Some(hud) = frame.hud {
                log::debug!(
                    "score {}/{}, {}s left, {} sprites",
                    hud.score,
                    hud.score_limit,
                    hud.remaining_secs,
                    frame.sprites.len()
                );
            }
        }

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    Some(state)
}

/// Show the end screen and wait out the restart delay.
/// Returns false if a quit signal arrived instead of a restart.
fn hold_end_screen(state: &RoundState, events: &mut InputState) -> bool {
    let frame = Frame::end_screen(state);
    if let Ok(json) = serde_json::to_string(&frame) {
        log::debug!("end frame: {json}");
    }
    match frame.end_stat {
        Some(EndStat::TimeSecs(t)) => log::info!("Victory! time: {t:.2}s"),
        Some(EndStat::Score(s)) => log::info!("Game over! score: {s}"),
        None => {}
    }

    // Restart input is ignored until the delay passes; the demo driver
    // restarts immediately after it.
    let opened = Instant::now();
    let frame_budget = Duration::from_secs_f32(SIM_DT);
    while opened.elapsed().as_secs_f32() < RESTART_DELAY_SECS {
        if events.quit_requested() {
            return false;
        }
        thread::sleep(frame_budget);
    }
    true
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
