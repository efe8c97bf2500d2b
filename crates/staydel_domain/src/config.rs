use std::time::Duration;

use chrono::{DateTime, Months, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Settings for one sweep invocation; never mutated during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
pub struct SweepConfig {
    /// Marker records older than this many months are purged regardless of
    /// their action or their target's existence.
    pub expiry_months: u32,
    /// Emit per-step progress lines in addition to the decision lines.
    pub verbose: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            expiry_months: 6,
            verbose: false,
        }
    }
}

impl SweepConfig {
    /// Records last modified before this instant are expired.
    pub fn expiry_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.expiry_months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Repetition settings for scheduled sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
pub struct ScheduleConfig {
    /// Number of sweep rounds; zero means a single immediate sweep.
    pub repeats: u32,
    /// Length of one scheduling window. Each round sweeps at a random offset
    /// within its window so independent instances spread their load.
    pub period: Duration,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            repeats: 0,
            period: Duration::from_secs(60 * 60),
        }
    }
}
