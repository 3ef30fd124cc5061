use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use geome_cli::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    if summary.dry_run {
        println!("Output: {} (dry run, nothing written)", summary.output_dir.display());
    } else {
        println!("Output: {}", summary.output_dir.display());
    }

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![Cell::new("Input records"), Cell::new(summary.input_rows)]);
    counts.add_row(vec![
        Cell::new("Measurement rows"),
        Cell::new(summary.long_rows),
    ]);
    counts.add_row(vec![
        Cell::new("Dropped"),
        count_cell(summary.dropped_rows, Color::Yellow),
    ]);
    counts.add_row(vec![
        Cell::new("Output rows").add_attribute(Attribute::Bold),
        Cell::new(summary.final_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{counts}");

    let mut chunks = Table::new();
    chunks.set_header(vec![header_cell("File"), header_cell("Rows")]);
    apply_summary_table_style(&mut chunks);
    align_column(&mut chunks, 1, CellAlignment::Right);
    for chunk in &summary.chunks {
        let name = chunk
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| chunk.path.display().to_string());
        let rows = if chunk.rows == 0 {
            dim_cell(0)
        } else {
            Cell::new(chunk.rows)
        };
        chunks.add_row(vec![Cell::new(name), rows]);
    }
    chunks.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.chunk_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{chunks}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
