pub mod directory;
pub mod options;
pub mod refine;
pub mod state;

pub use crate::domain::model::{
    ActiveFilters, Advocate, ExperienceRange, FilterOptions, RecordSet, EXPERIENCE_RANGES,
};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;
pub use directory::{Directory, LoadStatus};
pub use options::{derive_filter_options, FilterOptionsCache};
pub use refine::refine;
pub use state::RefinementState;
