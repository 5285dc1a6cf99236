//! Frame timing.
//!
//! A `Clock` hands the driver loop the time step of the next frame, in
//! seconds. `FixedClock` gives game code a constant delta, `RealtimeClock`
//! measures wall time between frames and `ScriptedClock` replays a known
//! sequence of deltas, which is what tests and replays want.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Seconds to advance the next frame by, or `None` once the clock has
    /// nothing more to give.
    fn tick(&mut self) -> Option<f32>;
}

pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

/// Converts a `Duration` to fractional seconds.
pub fn as_seconds(duration: Duration) -> f32 {
    duration.as_secs_f32()
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedClock {
    delta: f32,
}

impl FixedClock {
    pub fn new(delta: f32) -> Self {
        FixedClock { delta: delta }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Default for FixedClock {
    fn default() -> Self { FixedClock::new(DEFAULT_TIMESTEP) }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> Option<f32> {
        Some(self.delta)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RealtimeClock {
    last: Option<Instant>,
}

impl RealtimeClock {
    pub fn new() -> Self {
        RealtimeClock { last: None }
    }
}

impl Clock for RealtimeClock {
    /// The first tick reports zero elapsed time.
    fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = match self.last {
            Some(last) => as_seconds(now.duration_since(last)),
            None => 0.0,
        };
        self.last = Some(now);
        Some(delta)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedClock {
    deltas: VecDeque<f32>,
}

impl ScriptedClock {
    pub fn new<I>(deltas: I) -> Self
        where I: IntoIterator<Item = f32>
    {
        ScriptedClock { deltas: deltas.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl Clock for ScriptedClock {
    fn tick(&mut self) -> Option<f32> {
        self.deltas.pop_front()
    }
}
