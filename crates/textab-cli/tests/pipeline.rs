//! Integration tests for the build pipeline stages.

use std::path::PathBuf;

use tempfile::TempDir;

use textab_cli::pipeline::{ingest, output, preflight, render};
use textab_render::{MissingFieldPolicy, load_document_parts};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn setup(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let sheet = write_file(
        dir,
        "sheet.csv",
        "name,answer,score\nAda,Logic & numbers,91\nGrace,Compilers,88\n",
    );
    let preamble = write_file(dir, "preamble.tex", "\\documentclass{article}\n");
    let template = write_file(dir, "style.tex", "Entry: {{name}} -- {{answer}}");
    (sheet, preamble, template)
}

#[test]
fn full_pipeline_produces_the_document() {
    let dir = TempDir::new().unwrap();
    let (sheet, preamble, template) = setup(&dir);

    let parts = load_document_parts(&preamble, &template, None).unwrap();
    let ingested = ingest(&sheet, None).unwrap();
    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.profiles.len(), 3);

    let checked = preflight(&parts.entry_template, &ingested.records);
    assert_eq!(checked.keys, vec!["name".to_string(), "answer".to_string()]);
    assert!(checked.missing_columns.is_empty());

    let document = render(&parts, &ingested.records, MissingFieldPolicy::Abort).unwrap();
    assert_eq!(document.records_rendered, 2);

    let out_path = dir.path().join("output.tex");
    let written = output(&out_path, &document, false).unwrap();
    assert_eq!(written, Some(out_path.clone()));

    let text = std::fs::read_to_string(&out_path).unwrap();
    assert!(text.contains("Entry: Ada -- Logic \\& numbers"));
    assert!(text.contains("Entry: Grace -- Compilers"));
    assert!(text.contains("\\begin{document}"));
    assert!(text.ends_with("\\end{document}"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let (sheet, preamble, template) = setup(&dir);

    let parts = load_document_parts(&preamble, &template, None).unwrap();
    let ingested = ingest(&sheet, None).unwrap();
    let document = render(&parts, &ingested.records, MissingFieldPolicy::Abort).unwrap();

    let out_path = dir.path().join("output.tex");
    let written = output(&out_path, &document, true).unwrap();
    assert_eq!(written, None);
    assert!(!out_path.exists());
}

#[test]
fn preflight_flags_unmatched_keys() {
    let dir = TempDir::new().unwrap();
    let (sheet, _preamble, _template) = setup(&dir);

    let ingested = ingest(&sheet, None).unwrap();
    let checked = preflight("{{name}} {{nmae}}", &ingested.records);
    assert_eq!(checked.missing_columns, vec!["nmae".to_string()]);
}

#[test]
fn skip_policy_keeps_going_past_bad_records() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(
        &dir,
        "sheet.csv",
        "name,email\nAda,ada@example.org\nGrace,\n",
    );
    let preamble = write_file(&dir, "preamble.tex", "pre\n");
    // No record has a phone field, so every row fails lookup.
    let template = write_file(&dir, "style.tex", "{{name}}: {{phone}}");

    let parts = load_document_parts(&preamble, &template, None).unwrap();
    let ingested = ingest(&sheet, None).unwrap();

    let aborted = render(&parts, &ingested.records, MissingFieldPolicy::Abort);
    assert!(aborted.is_err());

    let document = render(&parts, &ingested.records, MissingFieldPolicy::Skip).unwrap();
    assert_eq!(document.records_rendered, 0);
    assert_eq!(document.skipped.len(), 2);
    assert_eq!(document.skipped[0].key, "phone");
}

#[test]
fn missing_cells_render_as_empty() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "sheet.csv", "name,score\nAda,91\nGrace,\n");
    let preamble = write_file(&dir, "preamble.tex", "pre\n");
    let template = write_file(&dir, "style.tex", "{{name}}: [{{score}}]");

    let parts = load_document_parts(&preamble, &template, None).unwrap();
    let ingested = ingest(&sheet, None).unwrap();
    let document = render(&parts, &ingested.records, MissingFieldPolicy::Abort).unwrap();

    // Numeric and missing cells both substitute as empty text.
    assert!(document.text.contains("Ada: []"));
    assert!(document.text.contains("Grace: []"));
}
