//! URL query-string decoding/encoding and the page filter `pick`.

use url::form_urlencoded;

use super::keys::PAGE_FILTER_PARAMS;
use super::value::{ParamValue, QueryParams};

/// Decode a query string (`?a=1&b=2&b=3`) into raw params.
///
/// A key seen once becomes [`ParamValue::Text`]; repeated keys become a
/// [`ParamValue::List`] in URL order.
pub fn parse_query_string(qs: &str) -> QueryParams {
    let qs = qs.strip_prefix('?').unwrap_or(qs);
    let mut params = QueryParams::new();
    for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
        let value = value.into_owned();
        match params.get_mut(&*key) {
            None => {
                params.insert(key.into_owned(), ParamValue::Text(value));
            }
            Some(ParamValue::List(items)) => items.push(value),
            Some(existing) => {
                let mut items: Vec<String> =
                    existing.leaves().map(|l| l.to_query_value()).collect();
                items.push(value);
                *existing = ParamValue::List(items);
            }
        }
    }
    params
}

/// Encode params in key order; lists become repeated keys.
pub fn to_query_string(params: &QueryParams) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        for leaf in value.leaves() {
            out.append_pair(key, &leaf.to_query_value());
        }
    }
    out.finish()
}

/// Keep only the page filter parameters plus `extra_keys`.
pub fn pick_page_filter_params(query: &QueryParams, extra_keys: &[&str]) -> QueryParams {
    query
        .iter()
        .filter(|(k, _)| {
            PAGE_FILTER_PARAMS.contains(&k.as_str()) || extra_keys.contains(&k.as_str())
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
