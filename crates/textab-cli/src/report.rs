//! Machine-readable run report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use textab_render::SkippedRecord;

use crate::types::BuildResult;

/// JSON report describing one `build` run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    pub sheet: PathBuf,
    pub output: Option<PathBuf>,
    pub records_read: usize,
    pub records_rendered: usize,
    pub keys: Vec<String>,
    pub missing_columns: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
    pub success: bool,
}

impl RunReport {
    pub fn from_result(result: &BuildResult) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            sheet: result.sheet.clone(),
            output: result.output.clone(),
            records_read: result.records_read,
            records_rendered: result.records_rendered,
            keys: result.keys.clone(),
            missing_columns: result.missing_columns.clone(),
            skipped: result.skipped.clone(),
            success: !result.has_errors,
        }
    }
}

/// Write the run report as pretty-printed JSON.
pub fn write_run_report(path: &Path, result: &BuildResult) -> Result<()> {
    let report = RunReport::from_result(result);
    let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
    std::fs::write(path, json)
        .with_context(|| format!("write run report: {}", path.display()))?;
    Ok(())
}
