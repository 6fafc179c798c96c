use chrono::NaiveTime;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Parse a time string in HH:MM:SS format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM:SS format.
pub fn parse_time_hms(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
}

/// Format an ETA for a train card, e.g. `3m 07s`. `None` renders as `N/A`.
#[must_use]
pub fn format_eta(seconds: Option<u64>) -> String {
    match seconds {
        Some(total) => {
            let mins = total / SECONDS_PER_MINUTE;
            let secs = total % SECONDS_PER_MINUTE;
            format!("{mins}m {secs:02}s")
        }
        None => "N/A".to_string(),
    }
}

/// Whole seconds of a reported duration; negative or non-finite means unknown
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_seconds(seconds: Option<f64>) -> Option<u64> {
    seconds
        .filter(|s| s.is_finite() && *s >= 0.0)
        .map(|s| s.floor() as u64)
}

/// Format seconds since simulation start as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 so late departures stay ordered; negative
/// input is treated as zero.
#[must_use]
pub fn format_clock_seconds(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
