#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::sort_pipeline::SortSettings;
use crate::domain::model::CatalogKind;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::RankingConfig;

/// Where a ranking job reads its entries from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    File(String),
    Http { endpoint: String, timeout: Duration },
}

/// Fully resolved job settings after the command line and ranking file are merged.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub source: SourceSpec,
    pub output_dir: String,
    pub settings: SortSettings,
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        match &self.source {
            SourceSpec::File(path) => {
                validation::validate_path("input", path)?;
                validation::validate_file_extension("input", path, &["json", "csv"])?;
            }
            SourceSpec::Http { endpoint, .. } => {
                validation::validate_url("endpoint", endpoint)?;
            }
        }

        validation::validate_path("output_dir", &self.output_dir)?;
        if let Some(output) = &self.settings.output_file {
            validation::validate_path("output", output)?;
        }
        validation::validate_non_empty_string("name_field", &self.settings.name_field)?;

        if self.settings.kind == CatalogKind::Models {
            let brand = validation::validate_required_field("brand", &self.settings.brand)?;
            if brand.trim().is_empty() {
                return Err(CatalogError::MissingConfigError {
                    field: "brand".to_string(),
                });
            }
        }
        Ok(())
    }
}
