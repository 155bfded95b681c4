//! Page filter state (projects, environments, time range, UTC) built from a location query.

mod filters;
mod page_state;

pub use filters::{get_environment, get_project, parse_int_prefix};
pub use page_state::{get_state_from_query, PageFiltersState};
