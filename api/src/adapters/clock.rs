//! Wall-clock adapter for the Clock port

use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
