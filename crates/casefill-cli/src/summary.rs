use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use casefill_cli::types::AnswerRunResult;

pub fn print_summary(result: &AnswerRunResult) {
    println!("Source: {}", result.source.display());
    if let Some(path) = &result.answer_csv {
        println!("Answer CSV: {}", path.display());
    }
    if let Some(path) = &result.payload_json {
        println!("Payload JSON: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Payloads"),
        header_cell("Skipped"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    let skipped = result.row_count.saturating_sub(result.payload_count);
    table.add_row(vec![
        Cell::new(result.row_count),
        Cell::new(result.column_count),
        Cell::new(result.payload_count),
        count_cell(skipped, Color::DarkGrey),
        count_cell(result.warnings.len(), Color::Yellow),
    ]);
    println!("{table}");
    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("- {warning}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for index in 0..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
