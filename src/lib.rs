pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, TomlConfig};

pub use adapters::{FileRecordSource, HttpRecordSource};
pub use app::{run_interactive, OutputFormat};
pub use crate::core::{
    derive_filter_options, refine, ActiveFilters, Advocate, Directory, FilterOptions,
    FilterOptionsCache, LoadStatus, RefinementState, EXPERIENCE_RANGES,
};
pub use utils::error::{DirectoryError, Result};
