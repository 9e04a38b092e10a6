use api::StartTime;

/// Formats seconds as `MM:SS`, or `HH:MM:SS` once there is at least one hour.
pub fn to_hhmmss(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours == 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Whole seconds of a start time, for use as the `t` query value of a deep link.
///
/// Anything after a `.` is cut off. Negative or unparsable values become `"0"`.
pub fn normalized_start_time(start: &StartTime) -> String {
    start_seconds(start).to_string()
}

/// Numeric form of [`normalized_start_time`].
pub fn start_seconds(start: &StartTime) -> u64 {
    match start {
        StartTime::Seconds(secs) if secs.is_finite() && *secs > 0.0 => secs.trunc() as u64,
        StartTime::Seconds(_) => 0,
        StartTime::Text(text) => {
            let whole = text.split('.').next().unwrap_or_default().trim();
            whole.parse::<u64>().unwrap_or(0)
        }
    }
}
