//! Relative stats periods ("14d", "24h", "30") and their display labels.

mod labels;
mod stats_period;

pub use labels::{relative_period_label, DEFAULT_RELATIVE_PERIODS, DEFAULT_STATS_PERIOD};
pub use stats_period::{coerce_stats_period, parse_stats_period, PeriodUnit, StatsPeriod};
