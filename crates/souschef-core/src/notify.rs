//! Notifier collaborator boundary.
//!
//! The engine asks a [`Notifier`] to schedule, cancel and raise
//! user-visible alerts. Every call is best-effort: scheduling may be
//! refused (permission denied, platform unsupported) and the engine must
//! keep counting down regardless, so callers inside the engine log
//! failures and move on rather than propagating them.

use thiserror::Error;

/// Why a notifier call failed.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification permission not granted")]
    PermissionDenied,

    #[error("notification backend unavailable: {0}")]
    Unavailable(String),

    #[error("no scheduled notification with handle '{0}'")]
    UnknownHandle(String),
}

/// External alert surface: scheduled alerts, immediate alerts, vibration.
pub trait Notifier {
    /// Schedule an alert to fire after `seconds`. Returns an opaque handle
    /// usable with [`Notifier::cancel`].
    fn schedule_after(&self, seconds: u64, message: &str) -> Result<String, NotifyError>;

    /// Cancel a previously scheduled alert. Best-effort: a stray alert
    /// firing after cancellation is tolerated by the caller.
    fn cancel(&self, handle: &str) -> Result<(), NotifyError>;

    /// Raise an alert right now.
    fn fire_immediate(&self, message: &str) -> Result<(), NotifyError>;

    /// Buzz the device with alternating on/off intervals in milliseconds.
    fn vibrate(&self, pattern: &[u64]) -> Result<(), NotifyError>;
}

/// Notifier that accepts everything and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn schedule_after(&self, _seconds: u64, _message: &str) -> Result<String, NotifyError> {
        Ok(String::new())
    }

    fn cancel(&self, _handle: &str) -> Result<(), NotifyError> {
        Ok(())
    }

    fn fire_immediate(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }

    fn vibrate(&self, _pattern: &[u64]) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotifierCall {
        Schedule {
            seconds: u64,
            message: String,
            handle: String,
        },
        Cancel {
            handle: String,
        },
        Immediate {
            message: String,
        },
        Vibrate {
            pattern: Vec<u64>,
        },
    }

    /// Records every call in order; optionally fails them all.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        calls: RefCell<Vec<NotifierCall>>,
        fail_all: bool,
        next_handle: RefCell<u32>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail_all: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<NotifierCall> {
            self.calls.borrow().clone()
        }

        pub fn scheduled_handles(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    NotifierCall::Schedule { handle, .. } => Some(handle),
                    _ => None,
                })
                .collect()
        }

        pub fn cancelled_handles(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    NotifierCall::Cancel { handle } => Some(handle),
                    _ => None,
                })
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn schedule_after(&self, seconds: u64, message: &str) -> Result<String, NotifyError> {
            if self.fail_all {
                return Err(NotifyError::PermissionDenied);
            }
            let mut next = self.next_handle.borrow_mut();
            *next += 1;
            let handle = format!("n{next}");
            self.calls.borrow_mut().push(NotifierCall::Schedule {
                seconds,
                message: message.to_string(),
                handle: handle.clone(),
            });
            Ok(handle)
        }

        fn cancel(&self, handle: &str) -> Result<(), NotifyError> {
            if self.fail_all {
                return Err(NotifyError::PermissionDenied);
            }
            self.calls.borrow_mut().push(NotifierCall::Cancel {
                handle: handle.to_string(),
            });
            Ok(())
        }

        fn fire_immediate(&self, message: &str) -> Result<(), NotifyError> {
            if self.fail_all {
                return Err(NotifyError::PermissionDenied);
            }
            self.calls.borrow_mut().push(NotifierCall::Immediate {
                message: message.to_string(),
            });
            Ok(())
        }

        fn vibrate(&self, pattern: &[u64]) -> Result<(), NotifyError> {
            if self.fail_all {
                return Err(NotifyError::PermissionDenied);
            }
            self.calls.borrow_mut().push(NotifierCall::Vibrate {
                pattern: pattern.to_vec(),
            });
            Ok(())
        }
    }
}
