//! Stats period parsing: `^(\d+)([hdmsw])?$`, unit defaulting to seconds.

use std::fmt;
use time::Duration;

/// Unit letter of a stats period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl PeriodUnit {
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Seconds => 's',
            Self::Minutes => 'm',
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Weeks => 'w',
        }
    }

    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
            Self::Weeks => 604_800,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
        }
    }
}

/// A relative window: "last `magnitude` `unit`s".
///
/// The magnitude keeps the digits exactly as supplied, so `"007d"` serializes back to `"007d"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StatsPeriod {
    pub magnitude: String,
    pub unit: PeriodUnit,
}

impl StatsPeriod {
    /// Numeric magnitude; None when the digit run does not fit in a u64.
    pub fn magnitude_value(&self) -> Option<u64> {
        self.magnitude.parse().ok()
    }

    /// Window length as a duration. None on overflow.
    pub fn to_duration(&self) -> Option<Duration> {
        let n = i64::try_from(self.magnitude_value()?).ok()?;
        n.checked_mul(self.unit.seconds()).map(Duration::seconds)
    }

    /// Generic English description, e.g. "Last 3 days" or "Last 1 hour".
    pub fn describe(&self) -> String {
        let n = self
            .magnitude_value()
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.magnitude.clone());
        let plural = if n == "1" { "" } else { "s" };
        format!("Last {} {}{}", n, self.unit.noun(), plural)
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.letter())
    }
}

/// Parse a stats period into magnitude and unit. Unit defaults to seconds when omitted.
pub fn parse_stats_period(input: &str) -> Option<StatsPeriod> {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(digits_end);
    let mut rest = rest.chars();
    let unit = match (rest.next(), rest.next()) {
        (None, _) => PeriodUnit::Seconds,
        (Some(c), None) => PeriodUnit::from_letter(c)?,
        (Some(_), Some(_)) => return None,
    };
    Some(StatsPeriod {
        magnitude: digits.to_string(),
        unit,
    })
}

/// Canonical `"<magnitude><unit>"` form of a period, or None if it does not parse.
pub fn coerce_stats_period(input: &str) -> Option<String> {
    parse_stats_period(input).map(|p| p.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_unit() {
        let p = parse_stats_period("14d").unwrap();
        assert_eq!(p.magnitude, "14");
        assert_eq!(p.unit, PeriodUnit::Days);
        assert_eq!(parse_stats_period("90m").unwrap().unit, PeriodUnit::Minutes);
        assert_eq!(parse_stats_period("2w").unwrap().unit, PeriodUnit::Weeks);
    }

    #[test]
    fn parse_defaults_to_seconds() {
        let p = parse_stats_period("3600").unwrap();
        assert_eq!(p.magnitude, "3600");
        assert_eq!(p.unit, PeriodUnit::Seconds);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "d", "abc", "-1d", "14dd", "14x", " 14d", "14d ", "1.5h", "14D"] {
            assert!(parse_stats_period(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn coerce_adds_explicit_unit() {
        assert_eq!(coerce_stats_period("30").as_deref(), Some("30s"));
        assert_eq!(coerce_stats_period("24h").as_deref(), Some("24h"));
        assert_eq!(coerce_stats_period("007d").as_deref(), Some("007d"));
        assert_eq!(coerce_stats_period("bogus"), None);
    }

    #[test]
    fn duration_and_description() {
        let p = parse_stats_period("2d").unwrap();
        assert_eq!(p.to_duration(), Some(Duration::days(2)));
        assert_eq!(p.describe(), "Last 2 days");
        assert_eq!(parse_stats_period("1h").unwrap().describe(), "Last 1 hour");
        assert!(parse_stats_period("99999999999999999999w")
            .unwrap()
            .to_duration()
            .is_none());
    }
}
