//! Normalized output: a period OR a start/end pair, the UTC flag, and passthrough params.

use serde::Serialize;

use crate::params::keys::{END, START, STATS_PERIOD, UTC};
use crate::params::{to_query_string, ParamValue, QueryParams};

/// Result of [`normalize_date_time_params`](super::normalize_date_time_params).
///
/// `None` means "not specified": the key is left out of JSON and query-string output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_period: Option<String>,
    /// `YYYY-MM-DDTHH:mm:ss.SSS`, UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// `"true"` or `"false"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
    /// Input keys the normalizer does not own, unchanged.
    #[serde(flatten)]
    pub others: QueryParams,
}

impl ParsedParams {
    /// Defined fields and passthrough keys as one mapping.
    pub fn to_query_params(&self) -> QueryParams {
        let mut out = self.others.clone();
        let fields = [
            (STATS_PERIOD, &self.stats_period),
            (START, &self.start),
            (END, &self.end),
            (UTC, &self.utc),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                out.insert(key.to_string(), ParamValue::Text(v.clone()));
            }
        }
        out
    }

    /// URL query string, keys in order, lists as repeated keys.
    pub fn to_query_string(&self) -> String {
        to_query_string(&self.to_query_params())
    }

    /// True when an absolute start/end pair was resolved.
    pub fn has_absolute_range(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
