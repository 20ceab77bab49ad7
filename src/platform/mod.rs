//! Platform abstraction layer
//!
//! Time lives behind the `Clock` trait so the host loop and tests share the
//! same gating code. Input and display plumbing live in `input` and `term`.

use std::time::Instant;

/// Monotonic elapsed-time source.
pub trait Clock {
    /// Seconds since the clock was created. Monotonic, never blocks.
    fn elapsed_seconds(&self) -> f32;
}

/// Wall clock backed by `std::time::Instant`.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Manually advanced clock for tests and headless drivers.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, seconds: f32) {
        self.now += seconds;
    }
}

impl Clock for ManualClock {
    fn elapsed_seconds(&self) -> f32 {
        self.now
    }
}

/// Gates simulation ticks on the current move delay.
///
/// `fire` returns true at most once per elapsed delay. Rendering is never
/// gated by it; the host renders every frame regardless.
#[derive(Debug, Default)]
pub struct TickTimer {
    last_fire: f32,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least `delay` seconds have passed since the last firing.
    pub fn fire(&mut self, now: f32, delay: f32) -> bool {
        if now - self.last_fire >= delay {
            self.last_fire = now;
            true
        } else {
            false
        }
    }
}
