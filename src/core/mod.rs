pub mod brand_family;
pub mod collation;
pub mod engine;
pub mod extract;
pub mod job;
pub mod model_sort;
pub mod priority;
pub mod repair_rules;

pub use crate::domain::model::{RankedCatalog, Record};
pub use crate::domain::ports::{CatalogSource, PartsLookup, Pipeline, Storage};
pub use crate::utils::error::Result;
