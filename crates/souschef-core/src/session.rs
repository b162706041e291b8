//! Per-recipe cooking session.
//!
//! [`CookingSession`] composes the extractor, the step cursor, the gesture
//! classifier and at most one [`TimerSession`] into the controller a front
//! end drives. All operations are caller-driven and single-threaded; the
//! session is serde round-trippable so a host can persist it between
//! invocations and reconcile elapsed time on load.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::cursor::{StepCursor, StepPhase};
use crate::events::{stamp, Event};
use crate::extract::{extract, ExtractedDuration};
use crate::gesture::{GestureIntent, GestureSample, GestureThresholds};
use crate::notify::Notifier;
use crate::recipe::Recipe;
use crate::text::tidy_instruction;
use crate::timer::{format_clock, TimerSession, TimerStatus};

/// One active cooking session: a recipe, a position in it, and 0-or-1
/// running countdown. Never shared across recipes; discard on finish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingSession {
    recipe: Recipe,
    cursor: StepCursor,
    #[serde(default)]
    timer: Option<TimerSession>,
    #[serde(default)]
    gestures: GestureThresholds,
}

impl CookingSession {
    pub fn new(recipe: Recipe) -> Self {
        Self::with_gestures(recipe, GestureThresholds::default())
    }

    pub fn with_gestures(recipe: Recipe, gestures: GestureThresholds) -> Self {
        let cursor = StepCursor::new(recipe.total_steps());
        Self {
            recipe,
            cursor,
            timer: None,
            gestures,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn cursor(&self) -> &StepCursor {
        &self.cursor
    }

    pub fn timer_status(&self) -> TimerStatus {
        self.timer
            .as_ref()
            .map(TimerSession::status)
            .unwrap_or(TimerStatus::Idle)
    }

    fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerSession::is_running)
    }

    /// The current instruction, exactly as the recipe states it.
    pub fn current_instruction(&self) -> Option<&str> {
        self.recipe.instruction(self.cursor.index())
    }

    /// The start-timer affordance for the current step: present only when
    /// the instruction mentions a usable duration and no countdown is
    /// already running. Starting is an explicit action, never automatic.
    pub fn timer_offer(&self) -> Option<ExtractedDuration> {
        if self.cursor.is_finished() || self.timer_running() {
            return None;
        }
        extract(self.current_instruction()?)
    }

    /// Full state for a front end to draw.
    pub fn snapshot(&self, clock: &dyn Clock) -> SessionSnapshot {
        let remaining_seconds = self
            .timer
            .as_ref()
            .filter(|timer| timer.is_running())
            .map(|timer| timer.remaining_seconds(clock));
        SessionSnapshot {
            recipe_title: self.recipe.title.clone(),
            step_index: self.cursor.index(),
            step_number: (self.cursor.index() + 1).min(self.recipe.total_steps()),
            total_steps: self.recipe.total_steps(),
            phase: self.cursor.phase(),
            finished: self.cursor.is_finished(),
            instruction: self
                .current_instruction()
                .map(tidy_instruction)
                .unwrap_or_default(),
            progress_fraction: self.cursor.progress_fraction(),
            timer_status: self.timer_status(),
            timer_label: self
                .timer
                .as_ref()
                .map(|timer| timer.source_label().to_string()),
            remaining_seconds,
            remaining_display: remaining_seconds.map(format_clock),
            timer_offer: self.timer_offer(),
            completion_note: self
                .cursor
                .is_finished()
                .then(|| format!("Enjoy your {}", self.recipe.title)),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance to the next step, or into the finished state from the last
    /// one. A countdown is scoped to the step that spawned it, so an index
    /// change cancels any running timer.
    pub fn advance(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        let index_before = self.cursor.index();
        if !self.cursor.advance() {
            return None;
        }
        if self.cursor.index() != index_before {
            self.cancel_timer(clock, notifier);
        }
        Some(Event::StepAdvanced {
            step_index: self.cursor.index(),
            phase: self.cursor.phase(),
            at: stamp(clock.now_ms()),
        })
    }

    /// Go back one step. No-op at the first step or once finished.
    pub fn retreat(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        if !self.cursor.retreat() {
            return None;
        }
        self.cancel_timer(clock, notifier);
        Some(Event::StepRetreated {
            step_index: self.cursor.index(),
            at: stamp(clock.now_ms()),
        })
    }

    /// Classify a drag and navigate accordingly.
    pub fn on_gesture(
        &mut self,
        sample: GestureSample,
        clock: &dyn Clock,
        notifier: &dyn Notifier,
    ) -> Option<Event> {
        match self.gestures.classify(sample) {
            GestureIntent::Previous => self.retreat(clock, notifier),
            GestureIntent::Next => self.advance(clock, notifier),
            GestureIntent::None => None,
        }
    }

    /// Start the countdown the current step offers. At most one timer is
    /// alive at a time: a still-running countdown is cancelled (scheduled
    /// alert included) before the new anchor is computed.
    pub fn start_timer(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        if self.cursor.is_finished() {
            return None;
        }
        let duration = extract(self.current_instruction()?)?;
        self.cancel_timer(clock, notifier);
        let timer = TimerSession::start(
            &duration,
            duration.matched_text.clone(),
            clock,
            notifier,
        )?;
        self.timer = Some(timer);
        Some(Event::TimerStarted {
            label: duration.matched_text,
            duration_secs: duration.seconds,
            at: stamp(clock.now_ms()),
        })
    }

    /// Stop a running countdown. No-op otherwise.
    pub fn stop_timer(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        self.cancel_timer(clock, notifier)
    }

    /// Periodic reconciliation; forward to the timer if one is running.
    pub fn tick(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        self.timer.as_mut()?.tick(clock, notifier)
    }

    /// Foreground reconciliation: one immediate tick folds in any time
    /// that passed while the host was suspended. The one-shot completion
    /// edge keeps the side effect from firing again if the scheduled
    /// alert already went off in the background.
    pub fn on_foreground(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        self.tick(clock, notifier)
    }

    /// End the session: cancels a running countdown and reports the
    /// terminal event. Safe to call more than once.
    pub fn finish(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Event {
        self.cancel_timer(clock, notifier);
        Event::SessionFinished {
            recipe_title: self.recipe.title.clone(),
            at: stamp(clock.now_ms()),
        }
    }

    fn cancel_timer(&mut self, clock: &dyn Clock, notifier: &dyn Notifier) -> Option<Event> {
        self.timer.as_mut()?.cancel(clock, notifier)
    }
}

/// Everything a front end needs to draw the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub recipe_title: String,
    pub step_index: usize,
    /// 1-based position for "step 3 of 8" displays.
    pub step_number: usize,
    pub total_steps: usize,
    pub phase: StepPhase,
    pub finished: bool,
    /// Current instruction, tidied for display.
    pub instruction: String,
    pub progress_fraction: f64,
    pub timer_status: TimerStatus,
    pub timer_label: Option<String>,
    pub remaining_seconds: Option<u64>,
    /// `H:MM:SS` when an hour or more remains, else `M:SS`.
    pub remaining_display: Option<String>,
    pub timer_offer: Option<ExtractedDuration>,
    /// Shown on the completion view ("Enjoy your Pad Thai").
    pub completion_note: Option<String>,
}
