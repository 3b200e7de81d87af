/// Time units in descending order of magnitude. A month is the 30.24-day
/// average the upstream tool used, a year is 365.25 days.
const UNITS: [(&str, f64); 5] = [
    ("year", 365.25 * 24.0 * 3600.0),
    ("month", 30.24 * 24.0 * 3600.0),
    ("day", 24.0 * 3600.0),
    ("hour", 3600.0),
    ("minute", 60.0),
];

/// Render a duration in seconds as its single largest whole unit,
/// e.g. `3700.0` becomes `"1 hour"` and `7200.0` becomes `"2 hours"`.
///
/// Deliberately lossy: only the first unit whose round-half-up value reaches
/// 1 is reported. Durations under about 30 seconds (and anything
/// non-positive, as a clock-skewed mean can be) come back as the empty
/// string.
pub fn human_duration(seconds: f64) -> String {
    for (name, unit_seconds) in UNITS {
        let rounded = (seconds / unit_seconds + 0.5).floor();
        if rounded >= 1.0 {
            let plural = if rounded >= 2.0 { "s" } else { "" };
            return format!("{} {}{}", rounded as i64, name, plural);
        }
    }
    String::new()
}
