use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use textab_cli::types::BuildResult;

pub fn print_summary(result: &BuildResult) {
    println!("Sheet: {}", result.sheet.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Rendered"),
        header_cell("Skipped"),
        header_cell("Keys"),
        header_cell("Unmatched keys"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.records_read),
        Cell::new(result.records_rendered),
        count_cell(result.skipped.len(), Color::Yellow),
        Cell::new(result.keys.len()),
        count_cell(result.missing_columns.len(), Color::Red),
    ]);
    println!("{table}");

    if !result.missing_columns.is_empty() {
        println!();
        println!("Template keys with no matching column:");
        for key in &result.missing_columns {
            println!("- {key}");
        }
    }

    if !result.skipped.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Record"),
            header_cell("Missing key"),
            header_cell("Detail"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for skipped in &result.skipped {
            table.add_row(vec![
                Cell::new(skipped.index),
                Cell::new(&skipped.key).fg(Color::Red),
                Cell::new(&skipped.message),
            ]);
        }
        println!();
        println!("Skipped records:");
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
