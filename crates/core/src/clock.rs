//! Time source used to stamp `last_update` columns.

use chrono::{SubsecRound, Utc};

use crate::types::Timestamp;

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock truncated to microseconds, the resolution of `TIMESTAMPTZ`,
/// so a freshly stamped model compares equal to the row read back.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().trunc_subsecs(6)
    }
}
