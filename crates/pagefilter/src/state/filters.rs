//! Project and environment list parameters.

use crate::params::ParamValue;

/// Base-10 integer prefix with leading whitespace and an optional sign: `" 12abc"` is 12.
///
/// Digit runs beyond the `i64` range saturate to `i64::MIN` / `i64::MAX`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let next = acc.saturating_mul(10);
        if negative {
            next.saturating_sub(digit)
        } else {
            next.saturating_add(digit)
        }
    });
    Some(value)
}

/// Project ids.
///
/// Absent is None. A list is parsed element-wise (unparsable elements are skipped).
/// A single value that is not a number yields an empty list, which is distinct from absent.
pub fn get_project(value: Option<&ParamValue>) -> Option<Vec<i64>> {
    let value = value?;
    Some(match value {
        ParamValue::List(items) => items
            .iter()
            .filter_map(|p| parse_int_prefix(p.as_str()))
            .collect(),
        ParamValue::Text(s) => parse_int_prefix(s).into_iter().collect(),
        ParamValue::Bool(_) | ParamValue::DateTime(_) => Vec::new(),
    })
}

/// Environment names. A single value becomes a one-element list; absent is None.
pub fn get_environment(value: Option<&ParamValue>) -> Option<Vec<String>> {
    let value = value?;
    Some(match value {
        ParamValue::List(items) => items.clone(),
        other => other.leaves().map(|l| l.to_query_value()).collect(),
    })
}
