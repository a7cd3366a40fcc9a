//! Input event handling
//!
//! The frontend delivers discrete events (quit, pointer button, key up/down)
//! plus a continuously sampled pointer position. `InputState` folds one
//! frame's worth of those into a `TickInput`, clearing one-shot flags on
//! handoff so an event never fires twice.

use glam::Vec2;

use crate::sim::{Steer, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow / A
    Left,
    /// Right arrow / D
    Right,
    /// Space
    Fire,
}

/// A discrete input event from the frontend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Pointer button pressed (fires an arrow)
    PointerDown,
    KeyDown(Key),
    KeyUp(Key),
}

/// Accumulates events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Vec2,
    steer: Option<Steer>,
    fire: bool,
    quit: bool,
}

impl InputState {
    /// Record the sampled pointer position (not event-driven)
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::PointerDown | InputEvent::KeyDown(Key::Fire) => self.fire = true,
            InputEvent::KeyDown(Key::Left) => self.steer = Some(Steer::Left),
            InputEvent::KeyDown(Key::Right) => self.steer = Some(Steer::Right),
            // Releasing either direction key halts, even if the other
            // direction key is still held
            InputEvent::KeyUp(Key::Left) | InputEvent::KeyUp(Key::Right) => {
                self.steer = Some(Steer::Halt)
            }
            InputEvent::KeyUp(Key::Fire) => {}
        }
    }

    /// True once a quit event has arrived; checked once per tick.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Hand off this frame's commands, clearing the one-shots
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer,
            steer: self.steer.take(),
            fire: std::mem::take(&mut self.fire),
            demo: false,
        }
    }
}
