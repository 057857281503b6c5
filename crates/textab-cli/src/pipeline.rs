//! Build pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the sheet into typed records
//! 2. **Preflight**: Discover template keys, check them against the header row
//! 3. **Render**: Substitute every record into the entry template
//! 4. **Output**: Write the assembled document
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; the `build` command wires them together.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use textab_ingest::{
    ColumnProfile, SheetFormat, profile_columns, read_records, read_records_with_format,
};
use textab_model::RecordSet;
use textab_render::{DocumentParts, MissingFieldPolicy, RenderedDocument, render_document};
use textab_template::discover_keys;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub records: RecordSet,
    pub profiles: Vec<ColumnProfile>,
}

/// Read the sheet into records and profile its columns.
pub fn ingest(sheet: &Path, format: Option<SheetFormat>) -> Result<IngestResult> {
    let records = match format {
        Some(format) => read_records_with_format(sheet, format),
        None => read_records(sheet),
    }
    .with_context(|| format!("ingest sheet: {}", sheet.display()))?;
    let profiles = profile_columns(&records);
    info!(
        rows = records.len(),
        columns = records.headers.len(),
        "sheet ingested"
    );
    Ok(IngestResult { records, profiles })
}

/// Result of the preflight stage.
#[derive(Debug)]
pub struct PreflightResult {
    /// Unique template keys in first-seen order.
    pub keys: Vec<String>,
    /// Keys with no matching column in the sheet.
    pub missing_columns: Vec<String>,
}

/// Discover the template's placeholder keys and check them against the
/// sheet's header row.
///
/// A key without a matching column is not an error here; records are only
/// checked during rendering, per the missing-field policy. It is almost
/// always a typo, so it is surfaced early.
pub fn preflight(entry_template: &str, records: &RecordSet) -> PreflightResult {
    let mut keys: Vec<String> = Vec::new();
    for key in discover_keys(entry_template) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    let missing_columns: Vec<String> = keys
        .iter()
        .filter(|key| !records.has_header(key))
        .cloned()
        .collect();
    for key in &missing_columns {
        warn!(key = %key, "template key has no matching sheet column");
    }
    debug!(keys = keys.len(), "template keys discovered");
    PreflightResult {
        keys,
        missing_columns,
    }
}

/// Substitute every record into the entry template.
pub fn render(
    parts: &DocumentParts,
    records: &RecordSet,
    policy: MissingFieldPolicy,
) -> Result<RenderedDocument> {
    let document = render_document(parts, &records.records, policy)?;
    info!(
        rendered = document.records_rendered,
        skipped = document.skipped.len(),
        "document rendered"
    );
    Ok(document)
}

/// Write the document, unless this is a dry run.
pub fn output(
    path: &Path,
    document: &RenderedDocument,
    dry_run: bool,
) -> Result<Option<std::path::PathBuf>> {
    if dry_run {
        info!(path = %path.display(), "dry run, output not written");
        return Ok(None);
    }
    textab_render::write_document(path, document)?;
    info!(path = %path.display(), bytes = document.text.len(), "output written");
    Ok(Some(path.to_path_buf()))
}
