//! Swipe-gesture classification.

use serde::{Deserialize, Serialize};

/// One completed drag, in the host's linear units (pixels and
/// pixels/second in the reference front end). Positive is rightward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub translation: f64,
    pub velocity: f64,
}

/// Navigation intent read from a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    Previous,
    Next,
    None,
}

/// Classification thresholds.
///
/// Configuration rather than constants so they can be tuned per device
/// density; persisted in the `[gestures]` section of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureThresholds {
    #[serde(default = "default_translation_threshold")]
    pub translation_threshold: f64,
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
}

fn default_translation_threshold() -> f64 {
    100.0
}

fn default_velocity_threshold() -> f64 {
    500.0
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            translation_threshold: default_translation_threshold(),
            velocity_threshold: default_velocity_threshold(),
        }
    }
}

impl GestureThresholds {
    /// A rightward swipe goes back a step, a leftward swipe goes forward.
    /// A drag that clears neither the distance nor the speed threshold is
    /// not a navigation gesture.
    pub fn classify(&self, sample: GestureSample) -> GestureIntent {
        if sample.translation > self.translation_threshold
            || sample.velocity > self.velocity_threshold
        {
            GestureIntent::Previous
        } else if sample.translation < -self.translation_threshold
            || sample.velocity < -self.velocity_threshold
        {
            GestureIntent::Next
        } else {
            GestureIntent::None
        }
    }
}
