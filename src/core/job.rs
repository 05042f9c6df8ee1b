use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs a pipeline stage by stage and reports progress through `tracing`.
pub struct CatalogJob<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CatalogJob<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting catalog ranking job...");

        tracing::debug!("Extracting catalog entries...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} entries", raw_data.len());

        tracing::debug!("Ranking catalog entries...");
        let ranked = self.pipeline.transform(raw_data).await?;
        tracing::info!("Ranked {} {}", ranked.records.len(), ranked.kind);

        tracing::debug!("Writing ranked catalog...");
        let destination = self.pipeline.load(ranked).await?;
        tracing::info!(
            "Output written to: {} ({} ms)",
            destination,
            started.elapsed().as_millis()
        );

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CatalogKind, RankedCatalog, Record};
    use crate::utils::error::CatalogError;
    use async_trait::async_trait;

    struct FixedPipeline {
        fail_extract: bool,
    }

    #[async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<Record>> {
            if self.fail_extract {
                return Err(CatalogError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            Ok(vec![Record::named("name", "iPhone")])
        }

        async fn transform(&self, data: Vec<Record>) -> Result<RankedCatalog> {
            Ok(RankedCatalog {
                kind: CatalogKind::Brands,
                rendered: format!("{}\n", data.len()),
                records: data,
            })
        }

        async fn load(&self, result: RankedCatalog) -> Result<String> {
            Ok(format!("memory:{}", result.rendered.trim()))
        }
    }

    #[tokio::test]
    async fn test_job_runs_all_stages() {
        let job = CatalogJob::new(FixedPipeline { fail_extract: false });
        assert_eq!(job.run().await.unwrap(), "memory:1");
    }

    #[tokio::test]
    async fn test_job_stops_on_extract_error() {
        let job = CatalogJob::new(FixedPipeline { fail_extract: true });
        assert!(matches!(
            job.run().await,
            Err(CatalogError::ProcessingError { .. })
        ));
    }
}
