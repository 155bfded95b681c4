//! Plain-text summary of a resolved page filter selection.

use pagefilter::period::relative_period_label;
use pagefilter::{parse_stats_period, PageFiltersState};
use std::io::Write;
use std::path::Path;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Render the summary of `state` to `out_path`.
pub fn render_summary(
    state: &PageFiltersState,
    out_path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    let text = build_summary(state);
    let mut f = std::fs::File::create(out_path.as_ref()).map_err(ReportError::Io)?;
    f.write_all(text.as_bytes()).map_err(ReportError::Io)?;
    Ok(())
}

/// Build the summary text (for printing or in-memory use).
pub fn build_summary(state: &PageFiltersState) -> String {
    let projects = match state.project.as_deref() {
        None | Some([]) => "all".to_string(),
        Some(ids) => ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    };
    let environments = match state.environment.as_deref() {
        None | Some([]) => "all".to_string(),
        Some(envs) => envs.join(", "),
    };
    format!(
        "Time range:   {}\nProjects:     {}\nEnvironments: {}\n",
        time_range_label(state),
        projects,
        environments
    )
}

/// "Last 14 days", "Last 3 hours", an absolute range, or "given timeframe".
pub fn time_range_label(state: &PageFiltersState) -> String {
    if let (Some(start), Some(end)) = (state.start, state.end) {
        let utc = state.utc == Some(true);
        let shown = |dt: OffsetDateTime| {
            let dt = if utc {
                dt.checked_to_offset(UtcOffset::UTC).unwrap_or(dt)
            } else {
                dt
            };
            format_instant(dt)
        };
        let zone = if utc { "UTC" } else { "local" };
        return format!("{} to {} ({})", shown(start), shown(end), zone);
    }
    let Some(period) = state.period.as_deref() else {
        return "given timeframe".to_string();
    };
    if let Some(label) = relative_period_label(period) {
        return label.to_string();
    }
    parse_stats_period(period)
        .map(|p| p.describe())
        .unwrap_or_else(|| "given timeframe".to_string())
}

fn format_instant(dt: OffsetDateTime) -> String {
    dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| "?".to_string())
}

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}
