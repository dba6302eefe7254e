//! Frame clock
//!
//! Turns a monotonic time source (seconds) into per-frame delta times.

/// Tracks the time of the previous sample
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: f64,
}

impl FrameClock {
    pub fn new(now: f64) -> Self {
        Self { last: now }
    }

    /// Seconds elapsed since the previous call (or construction).
    ///
    /// Never negative, even if the time source steps backwards.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = (now - self.last).max(0.0);
        self.last = now;
        dt as f32
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}
