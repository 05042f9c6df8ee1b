use crate::domain::model::{RankedCatalog, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where catalog entries come from: a local export or the shop backend.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Record>>;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<RankedCatalog>;
    async fn load(&self, result: RankedCatalog) -> Result<String>;
}

/// Spare-parts search against the stock service.
#[async_trait]
pub trait PartsLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<Record>>;
}
