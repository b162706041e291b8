//! Timer session implementation.
//!
//! A [`TimerSession`] is a wall-clock state machine anchored to an
//! absolute completion timestamp. It has no internal thread: the caller
//! invokes [`TimerSession::tick`] on a ~1 s cadence while the countdown is
//! running, and once immediately whenever the host process regains the
//! foreground. Because remaining time is derived from the anchor on every
//! read, arbitrarily long gaps between ticks (the process being fully
//! suspended included) cannot desynchronize the countdown.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> (Completed | Cancelled)
//! ```
//!
//! Completed and Cancelled are terminal. The completion side effect runs
//! only on the Running -> Completed edge, so the two detection paths
//! (local tick vs. the scheduled platform alert) cannot fire it twice.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::events::{stamp, Event};
use crate::extract::ExtractedDuration;
use crate::notify::Notifier;

/// Buzz pattern played when a countdown reaches zero (ms on/off intervals).
pub const VIBRATION_PATTERN: [u64; 5] = [500, 200, 500, 200, 500];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// One countdown, scoped to the instruction step that spawned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    /// Absolute completion timestamp (ms since epoch). Computed once at
    /// start and never recomputed; remaining time is always derived by
    /// subtracting the current clock reading from this anchor.
    target_end_at_ms: u64,
    /// Human-readable source of the countdown, usually the matched
    /// instruction span ("10-12 minutes").
    source_label: String,
    /// Handle of the scheduled completion alert, when scheduling succeeded.
    #[serde(default)]
    notification_handle: Option<String>,
    status: TimerStatus,
}

impl TimerSession {
    /// Start a countdown for `duration`, labelled `label` for alerts and
    /// display.
    ///
    /// Asks the notifier to schedule a completion alert as a backup for
    /// the local tick path; if scheduling fails the failure is logged and
    /// the countdown runs without it. Returns `None` for a zero-length
    /// duration, which is not actionable.
    pub fn start(
        duration: &ExtractedDuration,
        label: impl Into<String>,
        clock: &dyn Clock,
        notifier: &dyn Notifier,
    ) -> Option<Self> {
        if duration.seconds == 0 {
            return None;
        }
        let label = label.into();
        let target_end_at_ms = clock
            .now_ms()
            .saturating_add(duration.seconds.saturating_mul(1_000));
        let notification_handle =
            match notifier.schedule_after(duration.seconds, &completion_message(&label)) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    log::warn!("failed to schedule completion alert: {err}");
                    None
                }
            };
        Some(Self {
            target_end_at_ms,
            source_label: label,
            notification_handle,
            status: TimerStatus::Running,
        })
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn target_end_at_ms(&self) -> u64 {
        self.target_end_at_ms
    }

    /// Seconds left, rounded to the nearest second and clamped at zero.
    ///
    /// Pure: callable at any time, independent of whether any periodic
    /// tick has run.
    pub fn remaining_seconds(&self, clock: &dyn Clock) -> u64 {
        let delta_ms = self.target_end_at_ms.saturating_sub(clock.now_ms());
        (delta_ms + 500) / 1_000
    }

    /// Reconcile against the clock. Returns the completion event when a
    /// running countdown has reached zero; otherwise a no-op.
    pub fn tick(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        if self.status != TimerStatus::Running || self.remaining_seconds(clock) > 0 {
            return None;
        }
        self.status = TimerStatus::Completed;
        self.fire_completion(notifier);
        Some(Event::TimerCompleted {
            label: self.source_label.clone(),
            at: stamp(clock.now_ms()),
        })
    }

    /// Stop a running countdown. The scheduled alert is cancelled
    /// best-effort: the status flips before any notifier cleanup, and a
    /// stray alert arriving afterwards is tolerated.
    pub fn cancel(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }
        let remaining_secs = self.remaining_seconds(clock);
        self.status = TimerStatus::Cancelled;
        if let Some(handle) = self.notification_handle.take() {
            if let Err(err) = notifier.cancel(&handle) {
                log::warn!("failed to cancel scheduled alert {handle}: {err}");
            }
        }
        Some(Event::TimerCancelled {
            label: self.source_label.clone(),
            remaining_secs,
            at: stamp(clock.now_ms()),
        })
    }

    /// Completion side effect: retire the scheduled alert (local polling
    /// may have won the race against it), then alert and buzz right away.
    /// Runs exactly once, guarded by the Running -> Completed edge.
    fn fire_completion(&mut self, notifier: &dyn Notifier) {
        if let Some(handle) = self.notification_handle.take() {
            if let Err(err) = notifier.cancel(&handle) {
                log::warn!("failed to cancel scheduled alert {handle}: {err}");
            }
        }
        let message = completion_message(&self.source_label);
        if let Err(err) = notifier.fire_immediate(&message) {
            log::warn!("failed to raise completion alert: {err}");
        }
        if let Err(err) = notifier.vibrate(&VIBRATION_PATTERN) {
            log::warn!("vibration unavailable: {err}");
        }
    }
}

fn completion_message(label: &str) -> String {
    format!("Cooking timer complete: your {label} timer has finished!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::notify::test_support::{NotifierCall, RecordingNotifier};
    use proptest::prelude::*;

    fn minutes(n: u64) -> ExtractedDuration {
        ExtractedDuration {
            seconds: n * 60,
            matched_text: format!("{n} minutes"),
        }
    }

    fn start(
        duration: &ExtractedDuration,
        clock: &ManualClock,
        notifier: &RecordingNotifier,
    ) -> TimerSession {
        TimerSession::start(duration, duration.matched_text.clone(), clock, notifier).unwrap()
    }

    #[test]
    fn start_anchors_to_absolute_end_and_schedules_alert() {
        let clock = ManualClock::new(1_000_000);
        let notifier = RecordingNotifier::new();
        let timer = start(&minutes(10), &clock, &notifier);

        assert_eq!(timer.status(), TimerStatus::Running);
        assert_eq!(timer.target_end_at_ms(), 1_000_000 + 600_000);
        assert_eq!(timer.remaining_seconds(&clock), 600);
        match &notifier.calls()[0] {
            NotifierCall::Schedule { seconds, .. } => assert_eq!(*seconds, 600),
            other => panic!("expected schedule call, got {other:?}"),
        }
    }

    #[test]
    fn zero_duration_does_not_start() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let zero = ExtractedDuration {
            seconds: 0,
            matched_text: "0 minutes".into(),
        };
        assert!(TimerSession::start(&zero, "0 minutes", &clock, &notifier).is_none());
        assert!(notifier.calls().is_empty());
    }

    #[test]
    fn remaining_is_derived_not_accumulated() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let timer = start(&minutes(5), &clock, &notifier);

        // A long suspension with no ticks in between still yields the
        // correct remaining time on the next read.
        clock.advance(4 * 60 * 1_000);
        assert_eq!(timer.remaining_seconds(&clock), 60);
        clock.advance(10 * 60 * 1_000);
        assert_eq!(timer.remaining_seconds(&clock), 0);
    }

    #[test]
    fn remaining_rounds_to_nearest_second() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let timer = start(&minutes(1), &clock, &notifier);

        clock.set(59_499);
        assert_eq!(timer.remaining_seconds(&clock), 1);
        clock.set(59_501);
        assert_eq!(timer.remaining_seconds(&clock), 0);
    }

    #[test]
    fn tick_before_deadline_is_a_no_op() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let mut timer = start(&minutes(5), &clock, &notifier);

        clock.advance(1_000);
        assert!(timer.tick(&clock, &notifier).is_none());
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn tick_at_deadline_completes_with_side_effects() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let mut timer = start(&minutes(5), &clock, &notifier);
        let handle = notifier.scheduled_handles()[0].clone();

        clock.advance(5 * 60 * 1_000);
        let event = timer.tick(&clock, &notifier).unwrap();
        assert!(matches!(event, Event::TimerCompleted { .. }));
        assert_eq!(timer.status(), TimerStatus::Completed);

        // Pending backup alert retired first, then immediate alert + buzz.
        let calls = notifier.calls();
        assert_eq!(calls[1], NotifierCall::Cancel { handle });
        assert!(matches!(calls[2], NotifierCall::Immediate { .. }));
        assert_eq!(
            calls[3],
            NotifierCall::Vibrate {
                pattern: VIBRATION_PATTERN.to_vec()
            }
        );
    }

    #[test]
    fn completion_fires_exactly_once() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let mut timer = start(&minutes(1), &clock, &notifier);

        clock.advance(2 * 60 * 1_000);
        assert!(timer.tick(&clock, &notifier).is_some());
        let calls_after_completion = notifier.calls().len();

        assert!(timer.tick(&clock, &notifier).is_none());
        assert!(timer.tick(&clock, &notifier).is_none());
        assert_eq!(timer.status(), TimerStatus::Completed);
        assert_eq!(notifier.calls().len(), calls_after_completion);
    }

    #[test]
    fn cancel_retires_the_scheduled_alert() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::new();
        let mut timer = start(&minutes(10), &clock, &notifier);
        let handle = notifier.scheduled_handles()[0].clone();

        clock.advance(30_000);
        let event = timer.cancel(&clock, &notifier).unwrap();
        match event {
            Event::TimerCancelled { remaining_secs, .. } => assert_eq!(remaining_secs, 570),
            other => panic!("expected cancellation event, got {other:?}"),
        }
        assert_eq!(timer.status(), TimerStatus::Cancelled);
        assert_eq!(notifier.cancelled_handles(), vec![handle]);

        // Terminal: no further transitions, no further notifier traffic.
        assert!(timer.cancel(&clock, &notifier).is_none());
        assert!(timer.tick(&clock, &notifier).is_none());
    }

    #[test]
    fn notifier_failures_never_block_the_countdown() {
        let clock = ManualClock::new(0);
        let notifier = RecordingNotifier::failing();
        let mut timer =
            TimerSession::start(&minutes(2), "2 minutes", &clock, &notifier).unwrap();
        assert_eq!(timer.status(), TimerStatus::Running);
        assert_eq!(timer.remaining_seconds(&clock), 120);

        clock.advance(3 * 60 * 1_000);
        let event = timer.tick(&clock, &notifier);
        assert!(matches!(event, Some(Event::TimerCompleted { .. })));
        assert_eq!(timer.status(), TimerStatus::Completed);
    }

    #[test]
    fn survives_serde_round_trip() {
        let clock = ManualClock::new(7_000);
        let notifier = RecordingNotifier::new();
        let timer = start(&minutes(3), &clock, &notifier);

        let json = serde_json::to_string(&timer).unwrap();
        let restored: TimerSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.status(), TimerStatus::Running);
        assert_eq!(restored.target_end_at_ms(), timer.target_end_at_ms());
        assert_eq!(restored.remaining_seconds(&clock), 180);
    }

    proptest! {
        #[test]
        fn remaining_is_monotonically_non_increasing(
            duration_secs in 1u64..7_200,
            mut offsets in proptest::collection::vec(0u64..20_000_000, 1..20),
        ) {
            let clock = ManualClock::new(0);
            let notifier = RecordingNotifier::new();
            let duration = ExtractedDuration {
                seconds: duration_secs,
                matched_text: format!("{duration_secs} seconds"),
            };
            let timer = start(&duration, &clock, &notifier);

            offsets.sort_unstable();
            let mut previous = timer.remaining_seconds(&clock);
            for offset in offsets {
                clock.set(offset);
                let current = timer.remaining_seconds(&clock);
                prop_assert!(current <= previous);
                previous = current;
            }

            // At and beyond the anchor the countdown reads exactly zero.
            clock.set(timer.target_end_at_ms());
            prop_assert_eq!(timer.remaining_seconds(&clock), 0);
        }
    }
}
