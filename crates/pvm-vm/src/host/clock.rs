// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Monotonic millisecond clock.

/// A free-running monotonic millisecond source.
///
/// `SLP` compares two readings with unsigned subtraction, so wraparound
/// after ~49.7 days is tolerated and must not be "fixed" by widening the
/// type; see `now - timer` in [`Vm::step`](crate::vm::Vm::step).
pub trait Clock {
    /// Current time in milliseconds, free-running.
    fn now_ms(&self) -> u32;
}

/// A [`Clock`] backed by [`std::time::Instant`].
///
/// Mirrors the original's `now_ms()`, which reads `CLOCK_MONOTONIC` via
/// `clock_gettime` and returns `tv_sec * 1000 + tv_nsec / 1_000_000`.
#[cfg(any(test, feature = "std"))]
#[derive(Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(any(test, feature = "std"))]
impl StdClock {
    /// Start a new clock with its epoch at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "std"))]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "wraparound after ~49.7 days is the documented, tolerated behavior"
        )]
        let ms = self.origin.elapsed().as_millis() as u32;
        ms
    }
}
