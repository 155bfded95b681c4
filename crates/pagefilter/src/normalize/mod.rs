//! Date-time parameter normalization: one canonical time range per request.

mod normalizer;
mod options;
mod parsed;

pub use normalizer::normalize_date_time_params;
pub use options::NormalizeOptions;
pub use parsed::ParsedParams;
