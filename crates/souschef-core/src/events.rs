use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cursor::StepPhase;

/// Every state change in the engine produces an Event.
/// Front ends poll snapshots; the CLI prints events as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        label: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        label: String,
        at: DateTime<Utc>,
    },
    TimerCancelled {
        label: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StepAdvanced {
        step_index: usize,
        phase: StepPhase,
        at: DateTime<Utc>,
    },
    StepRetreated {
        step_index: usize,
        at: DateTime<Utc>,
    },
    SessionFinished {
        recipe_title: String,
        at: DateTime<Utc>,
    },
}

/// Event timestamp from an engine clock reading.
pub(crate) fn stamp(now_ms: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms as i64).unwrap_or_default()
}
