//! LaTeX document assembly.
//!
//! A document is the preamble, one substituted entry per record, and a
//! terminator. The preamble is used as-is when it already opens the
//! document body; otherwise `\begin{document}` is inserted. The terminator
//! is `\end{document}`, the postamble if it already contains one, or the
//! postamble followed by `\end{document}`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use textab_model::Record;
use textab_template::{SubstituteError, substitute};

const BEGIN_DOCUMENT: &str = "\\begin{document}";
const END_DOCUMENT: &str = "\\end{document}";

/// The three text inputs a document is assembled from.
#[derive(Debug, Clone)]
pub struct DocumentParts {
    pub preamble: String,
    /// Per-record pattern containing `{{key}}` placeholders.
    pub entry_template: String,
    pub postamble: Option<String>,
}

/// What to do when a record is missing a field the template names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Fail the whole render on the first missing field.
    Abort,
    /// Drop the record and keep going.
    Skip,
    /// Drop the record, keep going, and surface the failure to the caller
    /// as an error outcome.
    Report,
}

/// A record dropped during rendering, and why.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SkippedRecord {
    /// Zero-based source row index.
    pub index: usize,
    /// The identifier that failed to resolve.
    pub key: String,
    pub message: String,
}

/// A fully assembled document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub text: String,
    pub records_rendered: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Read the preamble, entry template, and optional postamble from disk.
pub fn load_document_parts(
    preamble: &Path,
    entry_template: &Path,
    postamble: Option<&Path>,
) -> Result<DocumentParts> {
    let preamble = std::fs::read_to_string(preamble)
        .with_context(|| format!("read preamble: {}", preamble.display()))?;
    let entry_template = std::fs::read_to_string(entry_template)
        .with_context(|| format!("read template: {}", entry_template.display()))?;
    let postamble = match postamble {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read postamble: {}", path.display()))?,
        ),
        None => None,
    };
    Ok(DocumentParts {
        preamble,
        entry_template,
        postamble,
    })
}

/// Assemble the document for a sequence of records.
///
/// Each record is substituted into the entry template independently. A
/// record that fails to resolve is handled per `policy`; a dropped record
/// contributes nothing to the output; partially substituted entries are
/// never emitted.
pub fn render_document(
    parts: &DocumentParts,
    records: &[Record],
    policy: MissingFieldPolicy,
) -> Result<RenderedDocument> {
    let mut text = String::new();
    text.push_str(&parts.preamble);
    if !parts.preamble.contains(BEGIN_DOCUMENT) {
        text.push_str(BEGIN_DOCUMENT);
        text.push('\n');
    }

    let mut records_rendered = 0usize;
    let mut skipped = Vec::new();
    for record in records {
        match substitute(&parts.entry_template, record) {
            Ok(entry) => {
                text.push('\n');
                text.push_str(&entry);
                text.push('\n');
                records_rendered += 1;
            }
            Err(error @ SubstituteError::MissingField { .. }) => {
                if policy == MissingFieldPolicy::Abort {
                    return Err(anyhow::Error::new(error)
                        .context(format!("record {}", record.index)));
                }
                let SubstituteError::MissingField { key, .. } = &error;
                warn!(record = record.index, key = %key, "record skipped");
                skipped.push(SkippedRecord {
                    index: record.index,
                    key: key.clone(),
                    message: error.to_string(),
                });
            }
        }
    }

    match &parts.postamble {
        None => text.push_str(END_DOCUMENT),
        Some(postamble) if postamble.contains(END_DOCUMENT) => {
            text.push('\n');
            text.push_str(postamble);
            text.push('\n');
        }
        Some(postamble) => {
            text.push('\n');
            text.push_str(postamble);
            text.push('\n');
            text.push_str(END_DOCUMENT);
        }
    }

    debug!(
        rendered = records_rendered,
        skipped = skipped.len(),
        "document assembled"
    );

    Ok(RenderedDocument {
        text,
        records_rendered,
        skipped,
    })
}

/// Write an assembled document to disk.
pub fn write_document(path: &Path, document: &RenderedDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, &document.text)
        .with_context(|| format!("write output: {}", path.display()))?;
    Ok(())
}
