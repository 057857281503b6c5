use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Color, Table};
use tracing::{info, info_span};

use textab_cli::pipeline::{IngestResult, PreflightResult, ingest, output, preflight, render};
use textab_cli::report::write_run_report;
use textab_cli::types::BuildResult;
use textab_ingest::SheetFormat;
use textab_render::{MissingFieldPolicy, load_document_parts};
use textab_template::discover_keys;

use crate::cli::{BuildArgs, InspectArgs, OnMissingArg, SheetFormatArg};
use crate::summary::{apply_table_style, header_cell};

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let build_span = info_span!("build", sheet = %args.sheet.display());
    let _build_guard = build_span.enter();
    let start = Instant::now();

    let parts = load_document_parts(
        &args.preamble,
        &args.template,
        args.postamble.as_deref(),
    )?;

    let IngestResult {
        records,
        profiles: _,
    } = ingest(&args.sheet, sheet_format(args.sheet_format))?;

    let PreflightResult {
        keys,
        missing_columns,
    } = preflight(&parts.entry_template, &records);

    let document = render(&parts, &records, missing_policy(args.on_missing))?;
    let output_path = output(&args.output, &document, args.dry_run)?;

    let has_errors =
        matches!(args.on_missing, OnMissingArg::Report) && !document.skipped.is_empty();
    let result = BuildResult {
        sheet: args.sheet.clone(),
        output: output_path,
        records_read: records.len(),
        records_rendered: document.records_rendered,
        skipped: document.skipped,
        keys,
        missing_columns,
        has_errors,
    };

    if let Some(path) = &args.report {
        write_run_report(path, &result)?;
        info!(path = %path.display(), "run report written");
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "build finished"
    );
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let IngestResult { records, profiles } = ingest(&args.sheet, sheet_format(args.sheet_format))?;

    println!("Sheet: {}", args.sheet.display());
    println!("Records: {}", records.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-empty"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for profile in &profiles {
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(profile.column_type.as_str()),
            Cell::new(profile.non_empty),
        ]);
    }
    println!("{table}");

    if let Some(template_path) = &args.template {
        let template = std::fs::read_to_string(template_path)
            .with_context(|| format!("read template: {}", template_path.display()))?;
        let mut keys: Vec<String> = Vec::new();
        for key in discover_keys(&template) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let mut table = Table::new();
        table.set_header(vec![header_cell("Placeholder"), header_cell("Column")]);
        apply_table_style(&mut table);
        for key in &keys {
            let status = if records.has_header(key) {
                Cell::new("present").fg(Color::Green)
            } else {
                Cell::new("MISSING").fg(Color::Red)
            };
            table.add_row(vec![Cell::new(key), status]);
        }
        println!();
        println!("Template: {}", template_path.display());
        println!("{table}");
    }

    Ok(())
}

fn sheet_format(arg: SheetFormatArg) -> Option<SheetFormat> {
    match arg {
        SheetFormatArg::Auto => None,
        SheetFormatArg::Csv => Some(SheetFormat::Csv),
        SheetFormatArg::Tsv => Some(SheetFormat::Tsv),
    }
}

fn missing_policy(arg: OnMissingArg) -> MissingFieldPolicy {
    match arg {
        OnMissingArg::Abort => MissingFieldPolicy::Abort,
        OnMissingArg::Skip => MissingFieldPolicy::Skip,
        OnMissingArg::Report => MissingFieldPolicy::Report,
    }
}
