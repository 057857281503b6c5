//! Document assembly for textab.
//!
//! Takes the loaded document parts (preamble, per-record entry template,
//! optional postamble) and a sequence of records, and produces the final
//! LaTeX text. Substitution itself lives in `textab-template`; this crate
//! owns the surrounding concatenation rules and file I/O.

mod document;

pub use document::{
    DocumentParts, MissingFieldPolicy, RenderedDocument, SkippedRecord, load_document_parts,
    render_document, write_document,
};
