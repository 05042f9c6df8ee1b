use crate::adapters::format::OutputFormat;
use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::app::sort_pipeline::SortSettings;
use crate::config::toml_config::RankingConfig;
use crate::config::{JobConfig, SourceSpec};
use crate::domain::model::CatalogKind;
use crate::utils::error::{CatalogError, Result};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "telegiganten-ranking")]
#[command(about = "Rank Telegiganten catalog entries the way the POS pickers show them")]
pub struct CliConfig {
    /// What the input holds
    #[arg(long, value_enum)]
    pub kind: CatalogKind,

    /// Owning brand, required for --kind models
    #[arg(long)]
    pub brand: Option<String>,

    /// Catalog export (.json or .csv)
    #[arg(long, conflicts_with = "endpoint")]
    pub input: Option<String>,

    /// Backend URL returning a JSON array
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file relative to --output-dir; stdout when omitted
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Ranking TOML file with custom priority lists and title rules
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field holding the display name (default: name, or title for repairs)
    #[arg(long)]
    pub name_field: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Validate and show the plan without reading any entries")]
    pub dry_run: bool,
}

impl CliConfig {
    /// Merges command line flags over the ranking file; flags win.
    pub fn to_job(&self, file: Option<&RankingConfig>) -> Result<JobConfig> {
        let timeout = Duration::from_secs(
            file.and_then(RankingConfig::timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        );

        let source = match (&self.input, &self.endpoint) {
            (Some(path), _) => SourceSpec::File(path.clone()),
            (None, Some(endpoint)) => SourceSpec::Http {
                endpoint: endpoint.clone(),
                timeout,
            },
            (None, None) => match file.and_then(RankingConfig::endpoint) {
                Some(endpoint) => SourceSpec::Http {
                    endpoint: endpoint.to_string(),
                    timeout,
                },
                None => {
                    return Err(CatalogError::MissingConfigError {
                        field: "input or endpoint".to_string(),
                    })
                }
            },
        };

        let mut settings = SortSettings::new(self.kind);
        settings.brand = self.brand.clone();
        if let Some(name_field) = self
            .name_field
            .clone()
            .or_else(|| file.and_then(RankingConfig::name_field).map(str::to_string))
        {
            settings.name_field = name_field;
        }
        settings.format = self
            .format
            .or_else(|| file.and_then(RankingConfig::output_format))
            .unwrap_or_default();
        settings.output_file = self.output.clone();

        Ok(JobConfig {
            source,
            output_dir: self.output_dir.clone(),
            settings,
        })
    }
}
