//! Daily file rotation: a validated time of day, a clock, and the thread that acts on them.

mod clock;
mod schedule;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use schedule::{RotationSchedule, TimeOfDay};
pub use scheduler::{DEFAULT_POLL_INTERVAL, RotationScheduler};
