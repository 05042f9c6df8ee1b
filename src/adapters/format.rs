use crate::domain::model::Record;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Decodes a JSON array of objects or of plain names.
pub fn decode_json(text: &str, name_field: &str) -> Result<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CatalogError::ProcessingError {
            message: "expected a JSON array of catalog entries".to_string(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            serde_json::Value::Object(obj) => records.push(Record {
                data: obj.into_iter().collect(),
            }),
            serde_json::Value::String(name) => records.push(Record::named(name_field, name)),
            serde_json::Value::Null => {
                tracing::warn!("Skipping null catalog entry at index {}", idx);
            }
            other => {
                return Err(CatalogError::ProcessingError {
                    message: format!("unsupported catalog entry at index {}: {}", idx, other),
                });
            }
        }
    }
    Ok(records)
}

/// Decodes CSV with a header row; every cell becomes a string field.
pub fn decode_csv(text: &str) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let data: HashMap<String, serde_json::Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(key, cell)| (key.to_string(), serde_json::Value::String(cell.to_string())))
            .collect();
        records.push(Record { data });
    }
    Ok(records)
}

/// Picks the decoder from the file extension, JSON unless it ends in `.csv`.
pub fn decode_for_path(path: &str, text: &str, name_field: &str) -> Result<Vec<Record>> {
    let is_csv = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        decode_csv(text)
    } else {
        decode_json(text, name_field)
    }
}

pub fn render(records: &[Record], format: OutputFormat, name_field: &str) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(records),
        OutputFormat::Csv => render_csv(records, name_field),
        OutputFormat::Text => Ok(records
            .iter()
            .map(|r| format!("{}\n", r.str_field(name_field)))
            .collect()),
    }
}

fn render_json(records: &[Record]) -> Result<String> {
    let ordered: Vec<BTreeMap<&String, &serde_json::Value>> =
        records.iter().map(|r| r.data.iter().collect()).collect();
    let mut out = serde_json::to_string_pretty(&ordered)?;
    out.push('\n');
    Ok(out)
}

fn render_csv(records: &[Record], name_field: &str) -> Result<String> {
    let others: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.data.keys().map(String::as_str))
        .filter(|key| *key != name_field)
        .collect();
    let columns: Vec<&str> = std::iter::once(name_field).chain(others).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|col| match record.data.get(*col) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::ProcessingError {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ProcessingError {
        message: e.to_string(),
    })
}
