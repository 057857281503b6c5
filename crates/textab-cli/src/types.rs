//! Result types shared between the pipeline and the summary/report output.

use std::path::PathBuf;

use textab_render::SkippedRecord;

/// Outcome of one `build` run.
#[derive(Debug)]
pub struct BuildResult {
    pub sheet: PathBuf,
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub records_read: usize,
    pub records_rendered: usize,
    /// Records dropped under the skip/report policies.
    pub skipped: Vec<SkippedRecord>,
    /// Unique placeholder keys the template uses, in first-seen order.
    pub keys: Vec<String>,
    /// Template keys with no matching sheet column.
    pub missing_columns: Vec<String>,
    /// True when the run should exit nonzero (report policy with drops).
    pub has_errors: bool,
}
