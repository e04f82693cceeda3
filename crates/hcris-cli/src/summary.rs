use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use crate::types::RunResult;

pub fn print_run_summary(result: &RunResult) {
    println!("Archive: {}", result.archive.display());
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Rows").add_attribute(Attribute::Bold),
        Cell::new("Elapsed").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(result.rows).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2?}", result.elapsed)),
    ]);
    println!("{table}");
}
