//! # Souschef Core Library
//!
//! Core engine for Souschef's cooking mode: walks a recipe's instructions
//! one step at a time and offers a countdown timer when a step mentions a
//! duration ("bake for 10-12 minutes").
//!
//! ## Architecture
//!
//! - **Duration extraction**: pure text scan producing a unit-normalized
//!   number of seconds plus the matched span for display
//! - **Timer session**: a wall-clock countdown anchored to an absolute end
//!   timestamp. No internal threads - the caller invokes `tick()` on a
//!   ~1 s cadence and once whenever the host regains the foreground, and
//!   remaining time is derived from the anchor on every read, so the tick
//!   cadence never affects correctness
//! - **Step cursor / gestures**: bounded progression with a terminal
//!   finished state, driven by explicit commands or classified swipes
//! - **Storage**: TOML configuration and a JSON snapshot of the active
//!   session
//!
//! Time and alerts enter the engine only through the [`Clock`] and
//! [`Notifier`] traits; everything else is pure state.
//!
//! ## Key Components
//!
//! - [`CookingSession`]: per-recipe controller (one cursor, 0-or-1 timer)
//! - [`TimerSession`]: countdown state machine
//! - [`extract`]: instruction text -> optional duration
//! - [`Config`]: application configuration management

pub mod clock;
pub mod cursor;
pub mod error;
pub mod events;
pub mod extract;
pub mod gesture;
pub mod notify;
pub mod recipe;
pub mod session;
pub mod storage;
pub mod text;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use cursor::{StepCursor, StepPhase};
pub use error::{ConfigError, CoreError, RecipeError, Result};
pub use events::Event;
pub use extract::{extract, ExtractedDuration};
pub use gesture::{GestureIntent, GestureSample, GestureThresholds};
pub use notify::{Notifier, NotifyError, NullNotifier};
pub use recipe::Recipe;
pub use session::{CookingSession, SessionSnapshot};
pub use storage::{Config, SessionStore};
pub use text::tidy_instruction;
pub use timer::{format_clock, TimerSession, TimerStatus};
