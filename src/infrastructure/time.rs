use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock time source; tests substitute a manual clock to drive
/// session expiry deterministically.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
