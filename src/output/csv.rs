//! CSV rendering

use super::table::{Cell, Table};

/// Escape a value for CSV output
/// Quotes fields holding commas, quotes or line breaks (RFC 4180)
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Collapse a cell to one line; nested rows become `a b; c d`
fn flatten(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Nested(table) => table
            .rows()
            .iter()
            .map(|row| row.iter().map(flatten).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("; "),
    }
}

/// Render a table as CSV, header first
pub fn render_csv(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows().len() + 1);
    lines.push(
        table
            .headers()
            .iter()
            .map(|h| escape_csv(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in table.rows() {
        lines.push(
            row.iter()
                .map(|cell| escape_csv(&flatten(cell)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
