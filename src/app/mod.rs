pub mod parts_search;
pub mod sort_pipeline;

pub use parts_search::{PartsSearch, SearchOutcome};
pub use sort_pipeline::{SortPipeline, SortSettings};
