use crate::adapters::format::{render, OutputFormat};
use crate::core::engine::RankingEngine;
use crate::core::{CatalogSource, Pipeline, RankedCatalog, Record, Storage};
use crate::domain::model::CatalogKind;
use crate::utils::error::{CatalogError, Result};

/// What to rank and where the result goes.
#[derive(Debug, Clone)]
pub struct SortSettings {
    pub kind: CatalogKind,
    /// Owning brand, required when ranking models.
    pub brand: Option<String>,
    pub name_field: String,
    pub format: OutputFormat,
    /// Relative to the storage base path; stdout when `None`.
    pub output_file: Option<String>,
}

impl SortSettings {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            brand: None,
            name_field: kind.name_field().to_string(),
            format: OutputFormat::default(),
            output_file: None,
        }
    }
}

pub struct SortPipeline<C: CatalogSource, S: Storage> {
    source: C,
    storage: S,
    engine: RankingEngine,
    settings: SortSettings,
}

impl<C: CatalogSource, S: Storage> SortPipeline<C, S> {
    pub fn new(source: C, storage: S, engine: RankingEngine, settings: SortSettings) -> Self {
        Self {
            source,
            storage,
            engine,
            settings,
        }
    }

    fn rank(&self, records: &mut [Record]) -> Result<()> {
        let field = self.settings.name_field.as_str();
        match self.settings.kind {
            CatalogKind::Brands => records.sort_by(|a, b| {
                self.engine
                    .compare_brand_names(a.str_field(field), b.str_field(field))
            }),
            CatalogKind::Repairs => records.sort_by(|a, b| {
                self.engine
                    .compare_repair_titles(a.str_field(field), b.str_field(field))
            }),
            CatalogKind::Models => {
                let brand = self
                    .settings
                    .brand
                    .as_deref()
                    .ok_or_else(|| CatalogError::MissingConfigError {
                        field: "brand".to_string(),
                    })?;
                let comparator = self.engine.model_comparator(brand);
                tracing::debug!("Model order for '{}': {:?}", brand, comparator.family());
                records.sort_by(|a, b| comparator.compare(a.str_field(field), b.str_field(field)));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<C: CatalogSource, S: Storage> Pipeline for SortPipeline<C, S> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Fetching {} from {}", self.settings.kind, self.source.describe());
        let records = self.source.fetch().await?;

        let unnamed = records
            .iter()
            .filter(|r| r.str_field(&self.settings.name_field).trim().is_empty())
            .count();
        if unnamed > 0 {
            tracing::warn!(
                "{} entries have no '{}' and will be listed last",
                unnamed,
                self.settings.name_field
            );
        }
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<RankedCatalog> {
        let mut records = data;
        self.rank(&mut records)?;
        let rendered = render(&records, self.settings.format, &self.settings.name_field)?;

        Ok(RankedCatalog {
            kind: self.settings.kind,
            records,
            rendered,
        })
    }

    async fn load(&self, result: RankedCatalog) -> Result<String> {
        match &self.settings.output_file {
            Some(file) => {
                self.storage
                    .write_file(file, result.rendered.as_bytes())
                    .await?;
                Ok(file.clone())
            }
            None => {
                print!("{}", result.rendered);
                Ok("stdout".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct StaticSource(Vec<&'static str>, &'static str);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<Record>> {
            Ok(self.0.iter().map(|n| Record::named(self.1, *n)).collect())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    fn names(catalog: &RankedCatalog, field: &str) -> Vec<String> {
        catalog
            .records
            .iter()
            .map(|r| r.str_field(field).to_string())
            .collect()
    }

    fn pipeline(names: Vec<&'static str>, settings: SortSettings) -> SortPipeline<StaticSource, LocalStorage> {
        let field: &'static str = settings.kind.name_field();
        SortPipeline::new(
            StaticSource(names, field),
            LocalStorage::new(".".to_string()),
            RankingEngine::default(),
            settings,
        )
    }

    #[tokio::test]
    async fn test_transform_repairs() {
        let p = pipeline(vec!["Diagnose", "Batteri", "Skærm (A+)"], SortSettings::new(CatalogKind::Repairs));
        let data = p.extract().await.unwrap();
        let ranked = p.transform(data).await.unwrap();
        assert_eq!(names(&ranked, "title"), vec!["Skærm (A+)", "Batteri", "Diagnose"]);
    }

    #[tokio::test]
    async fn test_transform_models_requires_brand() {
        let p = pipeline(vec!["iPhone 13"], SortSettings::new(CatalogKind::Models));
        let data = p.extract().await.unwrap();
        assert!(matches!(
            p.transform(data).await,
            Err(CatalogError::MissingConfigError { .. })
        ));
    }

    #[tokio::test]
    async fn test_transform_models_with_brand() {
        let mut settings = SortSettings::new(CatalogKind::Models);
        settings.brand = Some("Samsung mobil".to_string());
        settings.format = OutputFormat::Text;
        let p = pipeline(vec!["Galaxy A54", "Galaxy S24 Ultra", "Galaxy Z Flip5"], settings);

        let data = p.extract().await.unwrap();
        let ranked = p.transform(data).await.unwrap();
        assert_eq!(ranked.rendered, "Galaxy S24 Ultra\nGalaxy A54\nGalaxy Z Flip5\n");
    }

    #[tokio::test]
    async fn test_load_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let mut settings = SortSettings::new(CatalogKind::Brands);
        settings.output_file = Some("out/brands.txt".to_string());
        settings.format = OutputFormat::Text;

        let p = SortPipeline::new(
            StaticSource(vec!["Nokia mobil", "iPhone"], "name"),
            LocalStorage::new(dir.path().to_str().unwrap().to_string()),
            RankingEngine::default(),
            settings,
        );
        let data = p.extract().await.unwrap();
        let ranked = p.transform(data).await.unwrap();
        let dest = p.load(ranked).await.unwrap();

        assert_eq!(dest, "out/brands.txt");
        let written = std::fs::read_to_string(dir.path().join("out/brands.txt")).unwrap();
        assert_eq!(written, "iPhone\nNokia mobil\n");
    }
}
