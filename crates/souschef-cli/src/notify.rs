//! Terminal-backed notifier.
//!
//! A CLI invocation cannot outlive itself to deliver a scheduled alert, so
//! `schedule_after` only logs the request and hands back a handle; the
//! watch loop and the reconcile-on-load tick are the real completion
//! paths. That is the degraded mode the engine is built to tolerate - the
//! countdown itself never depends on the notifier.

use souschef_core::{Notifier, NotifyError};
use uuid::Uuid;

pub struct TermNotifier {
    enabled: bool,
    vibration: bool,
}

impl TermNotifier {
    pub fn new(enabled: bool, vibration: bool) -> Self {
        Self {
            enabled,
            vibration,
        }
    }
}

impl Notifier for TermNotifier {
    fn schedule_after(&self, seconds: u64, message: &str) -> Result<String, NotifyError> {
        if !self.enabled {
            return Err(NotifyError::PermissionDenied);
        }
        let handle = Uuid::new_v4().to_string();
        log::info!("scheduled alert {handle} in {seconds}s: {message}");
        Ok(handle)
    }

    fn cancel(&self, handle: &str) -> Result<(), NotifyError> {
        if !self.enabled {
            return Err(NotifyError::PermissionDenied);
        }
        log::info!("cancelled alert {handle}");
        Ok(())
    }

    fn fire_immediate(&self, message: &str) -> Result<(), NotifyError> {
        if !self.enabled {
            return Err(NotifyError::PermissionDenied);
        }
        eprintln!("\x07{message}");
        Ok(())
    }

    fn vibrate(&self, pattern: &[u64]) -> Result<(), NotifyError> {
        if !self.enabled || !self.vibration {
            return Err(NotifyError::PermissionDenied);
        }
        // One bell per buzz segment is the closest a terminal gets.
        for _ in pattern.iter().step_by(2) {
            eprint!("\x07");
        }
        Ok(())
    }
}
