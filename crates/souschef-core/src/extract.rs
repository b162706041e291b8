//! Duration extraction from instruction text.
//!
//! Scans free-form instruction text ("simmer for 10-12 minutes, stirring")
//! for a `<int>[-<int>] [to <int>] <unit>` mention and normalizes it to
//! seconds. Three unit families are tried in fixed priority order -
//! minutes, hours, seconds - and the first family that matches anywhere in
//! the text wins, regardless of where its match sits relative to other
//! families. A step saying "cook 2 hours, then rest 5 minutes" therefore
//! resolves to the minutes mention. Known limitation, kept deliberately:
//! position-based resolution would change long-standing behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A canonical duration pulled out of instruction text.
///
/// Produced only by [`extract`]; `seconds` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDuration {
    /// Unit-normalized span in seconds.
    pub seconds: u64,
    /// The exact substring that matched, kept verbatim for display
    /// ("10-12 minutes").
    pub matched_text: String,
}

/// Unit families in priority order, with their multiplier to seconds.
static FAMILIES: Lazy<[(Regex, u64); 3]> = Lazy::new(|| {
    [
        (pattern(r"minutes?|mins?"), 60),
        (pattern(r"hours?|hrs?"), 3_600),
        (pattern(r"seconds?|secs?"), 1),
    ]
});

fn pattern(unit: &str) -> Regex {
    Regex::new(&format!(r"(?i)(\d+)(?:-\d+)?\s*(?:to\s+\d+\s*)?(?:{unit})"))
        .expect("unit pattern is valid")
}

/// Find the first duration mention in `text`.
///
/// Returns `None` when nothing matches, when the mentioned value is zero
/// (a zero-second timer is not actionable), or when the matched digits do
/// not fit a `u64`. Ranges use the lower bound: "5-7 minutes" is 300
/// seconds with the full range preserved in `matched_text`.
pub fn extract(text: &str) -> Option<ExtractedDuration> {
    for (re, multiplier) in FAMILIES.iter() {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let value: u64 = caps.get(1)?.as_str().parse().ok()?;
        let seconds = value.saturating_mul(*multiplier);
        if seconds == 0 {
            return None;
        }
        return Some(ExtractedDuration {
            seconds,
            matched_text: caps.get(0)?.as_str().to_string(),
        });
    }
    None
}
