use arqa_shared_kernel::Value;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};

use super::Grid;

pub fn render(grid: &Grid) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(grid.headers.iter().map(Cell::new));

    for row in &grid.rows {
        table.add_row(row.iter().map(|value| match value {
            Some(v @ Value::Number(_)) => Cell::new(v).set_alignment(CellAlignment::Right),
            Some(v) => Cell::new(v),
            None => Cell::new(""),
        }));
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}
