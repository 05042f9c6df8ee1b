pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSource, HttpPartsLookup, HttpSource, LocalStorage, OutputFormat};
pub use app::{PartsSearch, SearchOutcome, SortPipeline, SortSettings};
pub use config::{JobConfig, RankingConfig, SourceSpec};
pub use crate::core::brand_family::BrandFamily;
pub use crate::core::engine::{RankingEngine, RankingTables};
pub use crate::core::job::CatalogJob;
pub use crate::core::model_sort::{make_model_comparator, ModelComparator};
pub use crate::core::priority::{make_priority_sorter, PriorityList, SENTINEL_RANK};
pub use domain::model::{Brand, CatalogKind, DeviceModel, Named, RankedCatalog, Record, RepairOption};
pub use utils::error::{CatalogError, Result};
