use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Wall-clock time. Everything outside tests uses this.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
