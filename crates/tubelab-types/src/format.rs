//! Display abbreviation for large counts.

/// Abbreviate a raw count for display: `1_234_567` → `"1.2M"`,
/// `45_600` → `"45.6K"`, `999` → `"999"`.
///
/// The thresholds are inclusive, so exactly one million renders as
/// `"1.0M"` and `999_999` stays in K form as `"1000.0K"`.
pub fn abbreviate(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Abbreviate a count still in its decimal-string wire form.
/// Unparseable input is treated as zero.
pub fn abbreviate_str(raw: &str) -> String {
    abbreviate(raw.trim().parse().unwrap_or(0))
}
