//! Normalization switches.

use serde::{Deserialize, Serialize};

use crate::period::DEFAULT_STATS_PERIOD;

/// Options for [`normalize_date_time_params`](super::normalize_date_time_params).
///
/// Every field is optional in JSON; missing keys take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Allow a result with neither a period nor start/end. Default false.
    pub allow_empty_period: bool,
    /// Period substituted when nothing valid resolves. Default "14d"; None disables it.
    pub default_stats_period: Option<String>,
    /// Parse `start` / `end` at all. Default true.
    pub allow_absolute_datetime: bool,
    /// Let `pageStart` / `pageEnd` override `start` / `end`. Default false.
    pub allow_absolute_page_datetime: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            allow_empty_period: false,
            default_stats_period: Some(DEFAULT_STATS_PERIOD.to_string()),
            allow_absolute_datetime: true,
            allow_absolute_page_datetime: false,
        }
    }
}
