//! Countdown display formatting.

/// Format a number of seconds as `H:MM:SS` when at least an hour remains,
/// otherwise `M:SS`.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_reference_values() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(3_599), "59:59");
        assert_eq!(format_clock(3_600), "1:00:00");
        assert_eq!(format_clock(7_325), "2:02:05");
    }

    /// Parse a `format_clock` rendering back to seconds.
    fn reparse(display: &str) -> u64 {
        display
            .split(':')
            .map(|part| part.parse::<u64>().unwrap())
            .fold(0, |acc, part| acc * 60 + part)
    }

    #[test]
    fn round_trips_reference_values() {
        for seconds in [0, 59, 60, 3_599, 3_600, 7_325] {
            assert_eq!(reparse(&format_clock(seconds)), seconds);
        }
    }

    proptest! {
        #[test]
        fn round_trips_any_duration(seconds in 0u64..1_000_000) {
            prop_assert_eq!(reparse(&format_clock(seconds)), seconds);
        }
    }
}
