//! Preset relative periods offered by the time range picker.

/// Period used when nothing valid is supplied and an empty period is not allowed.
pub const DEFAULT_STATS_PERIOD: &str = "14d";

/// Picker presets, shortest first.
pub const DEFAULT_RELATIVE_PERIODS: [(&str, &str); 6] = [
    ("1h", "Last hour"),
    ("24h", "Last 24 hours"),
    ("7d", "Last 7 days"),
    ("14d", "Last 14 days"),
    ("30d", "Last 30 days"),
    ("90d", "Last 90 days"),
];

/// Label for a preset period, matched on the exact canonical string.
pub fn relative_period_label(period: &str) -> Option<&'static str> {
    DEFAULT_RELATIVE_PERIODS
        .iter()
        .find(|(key, _)| *key == period)
        .map(|(_, label)| *label)
}
