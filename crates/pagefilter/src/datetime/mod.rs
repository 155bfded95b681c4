//! ISO-8601 date-time parsing anchored to UTC, and the canonical request format.

mod parse;

pub use parse::{
    format_canonical, normalize_date_time_leaf, parse_utc, try_parse_utc, utc_to_local, DateTimeError,
};
