//! Page filter state from a location query.

use serde::Serialize;
use time::{OffsetDateTime, UtcOffset};

use super::filters::{get_environment, get_project};
use crate::datetime::{parse_utc, utc_to_local};
use crate::normalize::{normalize_date_time_params, NormalizeOptions};
use crate::params::keys::{ENVIRONMENT, PROJECT};
use crate::params::QueryParams;

/// Selection state of the page filter bar.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageFiltersState {
    pub project: Option<Vec<i64>>,
    pub environment: Option<Vec<String>>,
    pub period: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end: Option<OffsetDateTime>,
    pub utc: Option<bool>,
}

impl PageFiltersState {
    /// Express `start` / `end` in `local`; the instants do not change.
    pub fn into_local(mut self, local: UtcOffset) -> Self {
        self.start = self.start.map(|dt| utc_to_local(dt, local));
        self.end = self.end.map(|dt| utc_to_local(dt, local));
        self
    }

    pub fn is_absolute(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Parse and normalize every page filter parameter of `query`.
///
/// - `project` and `environment` become lists (see [`get_project`] / [`get_environment`]).
/// - The time range is resolved by [`normalize_date_time_params`].
/// - `start` / `end` are parsed into instants only when both resolved and
///   `allow_absolute_datetime` is set; otherwise `period` carries the range.
///
/// `options.allow_absolute_datetime` is read as its effective value, so
/// `NormalizeOptions::default()` keeps absolute ranges. Pass it as `false` to
/// always get a relative period instead.
pub fn get_state_from_query(query: &QueryParams, options: &NormalizeOptions) -> PageFiltersState {
    let project = get_project(query.get(PROJECT));
    let environment = get_environment(query.get(ENVIRONMENT));

    let date_time = normalize_date_time_params(query, options);

    let absolute = if options.allow_absolute_datetime {
        let start = date_time.start.as_deref().and_then(parse_utc);
        let end = date_time.end.as_deref().and_then(parse_utc);
        start.zip(end)
    } else {
        None
    };
    let (start, end) = match absolute {
        Some((s, e)) => (Some(s), Some(e)),
        None => (None, None),
    };

    PageFiltersState {
        project,
        environment,
        period: date_time.stats_period.filter(|p| !p.is_empty()),
        start,
        end,
        utc: date_time.utc.map(|u| u == "true"),
    }
}
