mod clock;
mod sampler;
mod series;
mod tick;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use sampler::{RampSampler, RampTrace};
pub use series::SeriesPair;
pub use tick::{TickInterval, TickIntervalError};
