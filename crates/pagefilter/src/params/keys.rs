//! Query parameter names.

pub const PROJECT: &str = "project";
pub const ENVIRONMENT: &str = "environment";
pub const START: &str = "start";
pub const END: &str = "end";
pub const UTC: &str = "utc";
pub const STATS_PERIOD: &str = "statsPeriod";
/// Legacy alias of `statsPeriod`, lowest precedence.
pub const PERIOD: &str = "period";

pub const PAGE_STATS_PERIOD: &str = "pageStatsPeriod";
pub const PAGE_START: &str = "pageStart";
pub const PAGE_END: &str = "pageEnd";
pub const PAGE_UTC: &str = "pageUtc";

/// Parameters owned by the page filter bar.
pub const PAGE_FILTER_PARAMS: [&str; 6] = [PROJECT, ENVIRONMENT, START, END, UTC, STATS_PERIOD];

/// Parameters consumed by date-time normalization; everything else passes through.
pub const DATE_TIME_PARAMS: [&str; 9] = [
    PAGE_STATS_PERIOD,
    PAGE_START,
    PAGE_END,
    PAGE_UTC,
    START,
    END,
    PERIOD,
    STATS_PERIOD,
    UTC,
];
