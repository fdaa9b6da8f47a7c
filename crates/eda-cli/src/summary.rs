//! Console summary: top-5 entries per field.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eda_model::FrequencyTable;

use crate::pipeline::AnalysisResult;

const TOP_N: usize = 5;

pub fn print_summary(result: &AnalysisResult) {
    println!("Data file: {}", result.data_file.display());
    println!("Output: {}", result.output_dir.display());
    println!("Records: {}", result.record_count);
    println!();
    println!("Categorical field summaries:");
    print_section(&result.categorical, "Value");
    println!();
    println!("Numeric field buckets (Sturges):");
    print_section(&result.numeric, "Range");
}

fn print_section(tables: &[FrequencyTable], label_header: &str) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell(label_header),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for field_table in tables {
        for (idx, entry) in field_table.top(TOP_N).iter().enumerate() {
            let field_cell = if idx == 0 {
                Cell::new(&field_table.field)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                field_cell,
                Cell::new(&entry.label),
                Cell::new(entry.count),
            ]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
