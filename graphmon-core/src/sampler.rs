use uom::si::time::second;

use crate::{Clock, SeriesPair, TickInterval};

/// Samples a simulated linear ramp at a fixed tick.
///
/// Each iteration appends the point `(i, i + offset)` for the current counter
/// value `i`, waits one tick, and advances the counter. The loop stops once a
/// counter value past the threshold has been sampled, so both the threshold
/// value itself and the value one above it are included in the trace.
///
/// The series starts from a seed point that predates the loop. The historical
/// seed `(10, 11)` does not follow the `y = x + offset` ramp; the monitor has
/// always plotted it that way, so it is kept verbatim rather than corrected.
pub struct RampSampler {
    seed: (f64, f64),
    offset: u32,
    threshold: u32,
    tick: TickInterval,
}

impl RampSampler {
    /// Replaces the tick used between samples.
    #[must_use]
    pub fn with_tick(mut self, tick: TickInterval) -> Self {
        self.tick = tick;
        self
    }

    /// Runs the sampling loop to completion, waiting on `clock` between
    /// samples, and returns the accumulated trace.
    pub fn sample(&self, clock: &mut impl Clock) -> RampTrace {
        let mut series = SeriesPair::seeded(self.seed.0, self.seed.1);
        let mut count: u32 = 0;

        loop {
            series.push(f64::from(count), f64::from(count + self.offset));
            clock.wait(self.tick);

            // The stop check uses the counter value that was just sampled,
            // but the counter still advances past it before the loop exits.
            let past_threshold = count > self.threshold;
            count += 1;
            if past_threshold {
                break;
            }
        }

        RampTrace {
            series,
            final_count: count,
        }
    }
}

impl Default for RampSampler {
    fn default() -> Self {
        Self {
            seed: (10.0, 11.0),
            offset: 10,
            threshold: 100,
            tick: TickInterval::new::<second>(0.1).expect("Default tick is positive"),
        }
    }
}

/// The result of running a [`RampSampler`] to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RampTrace {
    series: SeriesPair,
    final_count: u32,
}

impl RampTrace {
    /// Returns the sampled series.
    #[must_use]
    pub fn series(&self) -> &SeriesPair {
        &self.series
    }

    /// Returns the counter value at loop exit.
    ///
    /// This is one past the last sampled counter value, since the counter
    /// advances once more after the final sample before the loop stops.
    #[must_use]
    pub fn final_count(&self) -> u32 {
        self.final_count
    }

    /// Consumes the trace and returns the sampled series.
    #[must_use]
    pub fn into_series(self) -> SeriesPair {
        self.series
    }
}
