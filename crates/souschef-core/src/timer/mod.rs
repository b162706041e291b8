//! Countdown timer anchored to an absolute completion timestamp.

mod format;
mod session;

pub use format::format_clock;
pub use session::{TimerSession, TimerStatus, VIBRATION_PATTERN};
