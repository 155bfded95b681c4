//! Precedence and fallback rules for the date-time page filters.

use tracing::debug;

use super::{NormalizeOptions, ParsedParams};
use crate::datetime::normalize_date_time_leaf;
use crate::params::keys::{
    DATE_TIME_PARAMS, END, PAGE_END, PAGE_START, PAGE_STATS_PERIOD, PAGE_UTC, PERIOD, START,
    STATS_PERIOD, UTC,
};
use crate::params::{select_first_valid, ParamLeaf, ParamValue, QueryParams};
use crate::period::coerce_stats_period;

fn leaf_period(leaf: ParamLeaf<'_>) -> Option<String> {
    match leaf {
        ParamLeaf::Text(s) => coerce_stats_period(s),
        _ => None,
    }
}

fn is_valid_instant(leaf: ParamLeaf<'_>) -> bool {
    normalize_date_time_leaf(leaf).is_some()
}

fn leaf_utc(leaf: ParamLeaf<'_>) -> String {
    let on = matches!(leaf, ParamLeaf::Bool(true) | ParamLeaf::Text("true"));
    on.to_string()
}

fn stats_period_value(params: &QueryParams, key: &str) -> Option<String> {
    let raw = params.get(key);
    let found = select_first_valid(raw, |leaf| leaf_period(leaf).is_some()).and_then(leaf_period);
    if found.is_none() && raw.is_some() {
        debug!(param = key, value = ?raw, "ignoring unparsable stats period");
    }
    found
}

fn date_time_value(params: &QueryParams, key: &str) -> Option<String> {
    let raw = params.get(key);
    let found = select_first_valid(raw, is_valid_instant).and_then(normalize_date_time_leaf);
    if found.is_none() && raw.is_some() {
        debug!(param = key, value = ?raw, "ignoring invalid date time");
    }
    found
}

fn utc_value(raw: Option<&ParamValue>) -> Option<String> {
    select_first_valid(raw, |_| true).map(leaf_utc)
}

/// Normalize the date-time page filter parameters.
///
/// Resolves exactly one of a stats period or an absolute start/end range:
/// `pageStatsPeriod` beats `statsPeriod` beats the legacy `period`, and any valid period
/// discards start/end. `pageStart`/`pageEnd` only count when
/// `allow_absolute_page_datetime` is set. With nothing usable the configured default
/// period is applied unless `allow_empty_period` is set.
///
/// Keys other than the date-time parameters are passed through untouched; `project` and
/// `environment` are normalized by [`get_state_from_query`](crate::get_state_from_query).
pub fn normalize_date_time_params(
    params: &QueryParams,
    options: &NormalizeOptions,
) -> ParsedParams {
    let mut period = stats_period_value(params, PAGE_STATS_PERIOD)
        .or_else(|| stats_period_value(params, STATS_PERIOD))
        .or_else(|| stats_period_value(params, PERIOD));

    let resolve = |page_key: &str, key: &str| {
        if !options.allow_absolute_datetime {
            return None;
        }
        if options.allow_absolute_page_datetime {
            date_time_value(params, page_key).or_else(|| date_time_value(params, key))
        } else {
            date_time_value(params, key)
        }
    };
    let start = resolve(PAGE_START, START);
    let end = resolve(PAGE_END, END);

    if (start.is_none() || end.is_none()) && period.is_none() && !options.allow_empty_period {
        period = options.default_stats_period.clone();
        debug!(default = ?period, "no usable time range, applying default period");
    }

    let (start, end) = if period.is_some() {
        (None, None)
    } else {
        (start, end)
    };

    let utc = utc_value(params.get(PAGE_UTC).or_else(|| params.get(UTC)));

    let others = params
        .iter()
        .filter(|(k, _)| !DATE_TIME_PARAMS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    ParsedParams {
        stats_period: period,
        start,
        end,
        utc,
        others,
    }
}
