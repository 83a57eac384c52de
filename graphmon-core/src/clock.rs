use std::thread;

use uom::si::{f64::Time, time::second};

use crate::TickInterval;

/// Provides the wait between consecutive samples.
///
/// The sampling loop is single-threaded; its only suspension point is the
/// call to [`wait`](Clock::wait). Swapping the clock changes how that wait is
/// realized without touching the loop itself: [`SystemClock`] blocks on the
/// wall clock, while [`VirtualClock`] advances instantly and records how long
/// it was asked to wait.
pub trait Clock {
    /// Waits for one tick. Assumed infallible.
    fn wait(&mut self, tick: TickInterval);
}

/// A wall-clock [`Clock`] that blocks the current thread for each tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn wait(&mut self, tick: TickInterval) {
        thread::sleep(tick.as_duration());
    }
}

/// A [`Clock`] that never sleeps, accumulating the requested wait time.
///
/// Useful for headless runs and for testing the timing of a sampling loop
/// without paying its wall-clock cost.
#[derive(Debug, Clone, Copy)]
pub struct VirtualClock {
    elapsed: Time,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: Time::new::<second>(0.0),
        }
    }

    /// Returns the total time this clock was asked to wait.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn wait(&mut self, tick: TickInterval) {
        self.elapsed += tick.into_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn virtual_clock_starts_at_zero() {
        let clock = VirtualClock::new();
        assert_relative_eq!(clock.elapsed().get::<second>(), 0.0);
    }

    #[test]
    fn virtual_clock_accumulates_waits() {
        let tick = TickInterval::new::<second>(0.1).unwrap();
        let mut clock = VirtualClock::new();

        for _ in 0..3 {
            clock.wait(tick);
        }

        assert_relative_eq!(clock.elapsed().get::<second>(), 0.3);
    }

    #[test]
    fn system_clock_waits_at_least_one_tick() {
        let tick = TickInterval::new::<second>(0.01).unwrap();
        let mut clock = SystemClock;

        let start = std::time::Instant::now();
        clock.wait(tick);

        assert!(start.elapsed() >= tick.as_duration());
    }
}
