//! Integration tests for document assembly.

use tempfile::TempDir;

use textab_model::{FieldValue, Record};
use textab_render::{
    DocumentParts, MissingFieldPolicy, load_document_parts, render_document, write_document,
};

fn survey_records() -> Vec<Record> {
    let mut first = Record::new(0);
    first.insert("name", FieldValue::from("Ada"));
    first.insert("answer", FieldValue::from("100% of the time"));
    first.insert("score", FieldValue::Number(91.5));

    let mut second = Record::new(1);
    second.insert("name", FieldValue::from("Grace"));
    second.insert("answer", FieldValue::from("Compilers & linkers"));
    second.insert("score", FieldValue::Number(88.0));

    vec![first, second]
}

#[test]
fn renders_full_document() {
    let parts = DocumentParts {
        preamble: "\\documentclass{article}\n".to_string(),
        entry_template: "Entry for {{name}}.\nAnswer: {{answer}} ({{score}})".to_string(),
        postamble: None,
    };
    let doc = render_document(&parts, &survey_records(), MissingFieldPolicy::Abort).unwrap();

    insta::assert_snapshot!(doc.text, @r"
    \documentclass{article}
    \begin{document}

    Entry for Ada.
    Answer: 100\% of the time ()

    Entry for Grace.
    Answer: Compilers \& linkers ()
    \end{document}
    ");
}

#[test]
fn loads_parts_and_writes_output() {
    let dir = TempDir::new().unwrap();
    let preamble = dir.path().join("preamble.tex");
    let template = dir.path().join("style.tex");
    let postamble = dir.path().join("end.tex");
    std::fs::write(&preamble, "\\documentclass{article}\n").unwrap();
    std::fs::write(&template, "Name: {{name}}").unwrap();
    std::fs::write(&postamble, "\\vfill").unwrap();

    let parts = load_document_parts(&preamble, &template, Some(&postamble)).unwrap();
    assert_eq!(parts.postamble.as_deref(), Some("\\vfill"));

    let doc = render_document(&parts, &survey_records(), MissingFieldPolicy::Abort).unwrap();
    let output = dir.path().join("out/output.tex");
    write_document(&output, &doc).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, doc.text);
    assert!(written.contains("Name: Ada"));
    assert!(written.ends_with("\\vfill\n\\end{document}"));
}

#[test]
fn load_reports_missing_files() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.tex");
    let err = load_document_parts(&absent, &absent, None).unwrap_err();
    assert!(err.to_string().contains("read preamble"));
}
