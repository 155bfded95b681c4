//! pagefilter — date-range and page filter normalization for dashboard URLs.
//!
//! Turns raw, possibly conflicting query parameters into one canonical time range:
//! a relative stats period or an absolute start/end pair, never both.
//! Pure functions; malformed input degrades to "absent" and never errors.

pub mod config;
pub mod datetime;
pub mod normalize;
pub mod params;
pub mod period;
pub mod state;

pub use config::ConfigError;
pub use normalize::{normalize_date_time_params, NormalizeOptions, ParsedParams};
pub use params::{parse_query_string, pick_page_filter_params, ParamValue, QueryParams};
pub use period::{coerce_stats_period, parse_stats_period, PeriodUnit, StatsPeriod};
pub use state::{get_state_from_query, PageFiltersState};
