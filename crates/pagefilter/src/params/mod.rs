//! Raw query parameter values, the first-valid selection helper, and the query-string codec.

pub mod keys;
mod query;
mod value;

pub use query::{parse_query_string, pick_page_filter_params, to_query_string};
pub use value::{select_first_valid, ParamLeaf, ParamValue, QueryParams};
