use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Anything shown in a picker by a single display name.
///
/// A missing name is reported as `""`; the ranking engine sorts such entries
/// last instead of failing.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for str {
    fn display_name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn display_name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn display_name(&self) -> &str {
        self.as_str()
    }
}

impl Named for Option<String> {
    fn display_name(&self) -> &str {
        self.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

impl Named for Brand {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A device model. The owning brand is passed to the comparator separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceModel {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand_id: Option<u64>,
}

impl DeviceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Named for DeviceModel {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepairOption {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "time")]
    pub time_minutes: Option<u32>,
}

impl RepairOption {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

impl Named for RepairOption {
    fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Loosely typed catalog row as delivered by the backend or a CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn named(field: &str, value: impl Into<String>) -> Self {
        let mut data = HashMap::new();
        data.insert(field.to_string(), serde_json::Value::String(value.into()));
        Self { data }
    }

    /// String value of `key`, or `""` when absent or not a string.
    pub fn str_field(&self, key: &str) -> &str {
        self.data
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Brands,
    Models,
    Repairs,
}

impl CatalogKind {
    /// Field carrying the display name in backend payloads.
    pub fn name_field(self) -> &'static str {
        match self {
            CatalogKind::Brands | CatalogKind::Models => "name",
            CatalogKind::Repairs => "title",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CatalogKind::Brands => "brands",
            CatalogKind::Models => "models",
            CatalogKind::Repairs => "repairs",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct RankedCatalog {
    pub kind: CatalogKind,
    pub records: Vec<Record>,
    pub rendered: String,
}
