//! Time source port

use chrono::{DateTime, Utc};

/// Source of the current time, injected wherever records get timestamped
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
