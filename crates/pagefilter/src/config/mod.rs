//! Loading [`NormalizeOptions`](crate::NormalizeOptions) from JSON config files.

mod loader;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
