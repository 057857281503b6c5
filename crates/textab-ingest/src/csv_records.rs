//! CSV/TSV reading into typed records.
//!
//! The first non-empty row is taken as the header; every following row
//! becomes one [`Record`]. Column types are inferred before typing any
//! cell, the way a dataframe library assigns dtypes: a column whose
//! non-empty cells all parse as numbers is numeric, all-boolean columns are
//! boolean, everything else is text. Empty cells are missing values
//! regardless of the column's type.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use textab_model::{FieldValue, Record, RecordSet};

use crate::error::{IngestError, Result};
use crate::sheet::SheetFormat;

/// Inferred type of one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Number,
    Bool,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
        }
    }
}

/// Per-column profile of a loaded record set, for diagnostics.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    /// Cells that are not missing.
    pub non_empty: usize,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

fn infer_column_type(rows: &[Vec<String>], col_idx: usize) -> ColumnType {
    let mut non_empty = 0usize;
    let mut numeric = 0usize;
    let mut boolean = 0usize;
    for row in rows {
        let value = row.get(col_idx).map(String::as_str).unwrap_or("");
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            numeric += 1;
        }
        if is_boolean(trimmed) {
            boolean += 1;
        }
    }
    if non_empty == 0 {
        ColumnType::Text
    } else if numeric == non_empty {
        ColumnType::Number
    } else if boolean == non_empty {
        ColumnType::Bool
    } else {
        ColumnType::Text
    }
}

fn typed_cell(value: &str, column_type: ColumnType) -> FieldValue {
    if value.is_empty() {
        return FieldValue::Missing;
    }
    match column_type {
        ColumnType::Number => match value.parse::<f64>() {
            Ok(number) => FieldValue::Number(number),
            Err(_) => FieldValue::Text(value.to_string()),
        },
        ColumnType::Bool => FieldValue::Bool(value.eq_ignore_ascii_case("true")),
        ColumnType::Text => FieldValue::Text(value.to_string()),
    }
}

/// Read a sheet into records, detecting the format from the extension.
pub fn read_records(path: &Path) -> Result<RecordSet> {
    let format = SheetFormat::detect(path)?;
    read_records_with_format(path, format)
}

/// Read a sheet into records with an explicit format.
pub fn read_records_with_format(path: &Path, format: SheetFormat) -> Result<RecordSet> {
    if !path.is_file() {
        return Err(IngestError::SheetNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter())
        .from_path(path)
        .map_err(|source| IngestError::SheetRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::SheetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let data_rows: Vec<Vec<String>> = raw_rows
        .into_iter()
        .skip(1)
        .map(|record| {
            let mut row = Vec::with_capacity(headers.len());
            for idx in 0..headers.len() {
                let value = record.get(idx).map(String::as_str).unwrap_or("");
                row.push(value.to_string());
            }
            row
        })
        .collect();

    let column_types: Vec<ColumnType> = (0..headers.len())
        .map(|idx| infer_column_type(&data_rows, idx))
        .collect();

    let mut records = Vec::with_capacity(data_rows.len());
    for (index, row) in data_rows.iter().enumerate() {
        let mut record = Record::new(index);
        for (col_idx, header) in headers.iter().enumerate() {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            record.insert(header.clone(), typed_cell(value.trim(), column_types[col_idx]));
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        "read sheet"
    );

    Ok(RecordSet { headers, records })
}

/// Profile each column of a loaded record set.
///
/// The reported type is the one inference assigned during reading,
/// reconstructed from the typed cells.
pub fn profile_columns(set: &RecordSet) -> Vec<ColumnProfile> {
    set.headers
        .iter()
        .map(|header| {
            let mut column_type = ColumnType::Text;
            let mut non_empty = 0usize;
            for record in &set.records {
                match record.fields.get(header) {
                    Some(FieldValue::Number(_)) => {
                        column_type = ColumnType::Number;
                        non_empty += 1;
                    }
                    Some(FieldValue::Bool(_)) => {
                        column_type = ColumnType::Bool;
                        non_empty += 1;
                    }
                    Some(FieldValue::Text(_)) => {
                        non_empty += 1;
                    }
                    Some(FieldValue::Missing) | None => {}
                }
            }
            ColumnProfile {
                name: header.clone(),
                column_type,
                non_empty,
            }
        })
        .collect()
}
