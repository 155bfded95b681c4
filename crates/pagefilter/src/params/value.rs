//! Parameter values as they arrive from a URL query or a picker.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use time::OffsetDateTime;

use crate::datetime::format_canonical;

/// Raw query parameters by name. A missing key means "absent".
pub type QueryParams = BTreeMap<String, ParamValue>;

/// One raw parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean supplied programmatically (e.g. the picker's UTC toggle).
    Bool(bool),
    Text(String),
    /// Repeated query keys, in URL order.
    List(Vec<String>),
    /// Instant supplied programmatically (e.g. the picker's start/end).
    #[serde(skip_deserializing, serialize_with = "serialize_instant")]
    DateTime(OffsetDateTime),
}

/// A single scalar inside a [`ParamValue`]; list elements are always text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamLeaf<'a> {
    Bool(bool),
    Text(&'a str),
    DateTime(OffsetDateTime),
}

impl ParamValue {
    /// Scalars in order: one for a single value, each element for a list.
    pub fn leaves(&self) -> impl Iterator<Item = ParamLeaf<'_>> + '_ {
        let (single, list) = match self {
            ParamValue::Bool(b) => (Some(ParamLeaf::Bool(*b)), None),
            ParamValue::Text(s) => (Some(ParamLeaf::Text(s)), None),
            ParamValue::DateTime(dt) => (Some(ParamLeaf::DateTime(*dt)), None),
            ParamValue::List(items) => (None, Some(items.iter())),
        };
        single
            .into_iter()
            .chain(list.into_iter().flatten().map(|s| ParamLeaf::Text(s.as_str())))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        ParamValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<OffsetDateTime> for ParamValue {
    fn from(dt: OffsetDateTime) -> Self {
        ParamValue::DateTime(dt)
    }
}

impl ParamLeaf<'_> {
    /// Query-string form of the scalar.
    pub fn to_query_value(self) -> String {
        match self {
            ParamLeaf::Bool(b) => b.to_string(),
            ParamLeaf::Text(s) => s.to_string(),
            ParamLeaf::DateTime(dt) => format_canonical(dt).unwrap_or_default(),
        }
    }
}

fn serialize_instant<S: Serializer>(dt: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_canonical(*dt).unwrap_or_default())
}

/// First scalar of `value` accepted by `is_valid`.
///
/// A list yields its first valid element in list order; a single value is checked directly;
/// an absent value yields None.
pub fn select_first_valid<'a>(
    value: Option<&'a ParamValue>,
    is_valid: impl Fn(ParamLeaf<'a>) -> bool,
) -> Option<ParamLeaf<'a>> {
    value?.leaves().find(|leaf| is_valid(*leaf))
}
