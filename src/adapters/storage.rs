use crate::adapters::format::decode_for_path;
use crate::core::{CatalogSource, Record, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Catalog export on disk, `.json` or `.csv`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: String,
    name_field: String,
}

impl FileSource {
    pub fn new(path: impl Into<String>, name_field: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name_field: name_field.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading catalog file: {}", self.path);
        let text = tokio::fs::read_to_string(&self.path).await?;
        decode_for_path(&self.path, &text, &self.name_field)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path)
    }
}
