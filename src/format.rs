//! Number formatting and parsing for labels and bound entries.

/// Format a tick label: exponential for magnitudes below `1e-3`, fixed
/// with three decimals otherwise.
pub fn format_tick_value(value: f64) -> String {
    if value.abs() < 1e-3 {
        format!("{:.1e}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Format a bound for display in a range entry.
///
/// Regular magnitudes get three decimals, near-zero values exponential
/// notation, and the band in between six decimals.
pub fn format_bound_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude > 1e-3 {
        format!("{:.3}", value)
    } else if magnitude < 1e-8 {
        format!("{:.1e}", value)
    } else {
        format!("{:.6}", value)
    }
}

/// Parse entry text the way C `atof` does: skip leading whitespace, read
/// the longest numeric prefix and ignore the rest. Text without a numeric
/// prefix reads as `0.0`, and so does a prefix naming an infinity or NaN.
pub fn parse_bound_text(text: &str) -> f64 {
    let trimmed = text.trim_start();
    (1..=trimmed.len())
        .rev()
        .filter(|&end| trimmed.is_char_boundary(end))
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
