use std::{
    fmt,
    ops::{Add, AddAssign, Deref},
    time::Duration,
};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A unit-safe, strictly positive duration between consecutive samples.
///
/// `TickInterval` wraps a [`Time`] value while enforcing that the interval is
/// strictly greater than zero, so a sampling loop can never be asked to wait
/// for nothing (or for negative time).
///
/// Construct one from a concrete [`uom`] unit:
///
/// ```
/// use graphmon_core::TickInterval;
/// use uom::si::time::second;
///
/// let tick = TickInterval::new::<second>(0.1).unwrap();
/// assert_eq!(tick.as_duration().as_millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TickInterval(Time);

/// Error type returned when constructing an invalid [`TickInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TickIntervalError {
    #[error("Tick interval must be greater than zero, got {0} s")]
    NotPositive(f64),
}

impl TickInterval {
    /// Constructs a `TickInterval` from a numeric value and unit.
    ///
    /// # Errors
    ///
    /// Returns [`TickIntervalError::NotPositive`] if `value` is zero or
    /// negative.
    pub fn new<U>(value: f64) -> Result<Self, TickIntervalError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TickInterval` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TickIntervalError::NotPositive`] if the time is zero or
    /// negative.
    pub fn from_time(time: Time) -> Result<Self, TickIntervalError> {
        let seconds = time.get::<time::second>();
        if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TickIntervalError::NotPositive(seconds))
        }
    }

    /// Returns the interval as a [`std::time::Duration`], suitable for
    /// passing to [`std::thread::sleep`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.0.get::<time::second>())
    }

    /// Consumes the `TickInterval` and returns the underlying [`Time`] value.
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TickInterval {
    type Error = TickIntervalError;
    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

/// Dereferences to the inner [`Time`] value, so the interval can be used
/// anywhere a `Time` reference is expected.
impl Deref for TickInterval {
    type Target = Time;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for TickInterval {
    type Output = TickInterval;
    fn add(self, rhs: TickInterval) -> Self::Output {
        TickInterval(self.0 + rhs.0)
    }
}

impl AddAssign for TickInterval {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Advances a [`Time`] value by one tick.
impl Add<TickInterval> for Time {
    type Output = Time;
    fn add(self, rhs: TickInterval) -> Self::Output {
        self + rhs.0
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.get::<time::second>();
        write!(f, "{s} s")
    }
}
