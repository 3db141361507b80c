//! Table model and aligned text rendering

use std::fmt;

use comfy_table::presets::NOTHING;

/// One table cell: plain text or an embedded sub-table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Nested(Table),
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Table> for Cell {
    fn from(table: Table) -> Self {
        Cell::Nested(table)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Nested(table) => f.write_str(&table.render_text()),
        }
    }
}

/// Headers plus rows of cells, rendered as text or CSV
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Add a two-column name/value row
    pub fn add_pair(&mut self, name: &str, value: impl Into<Cell>) {
        self.rows.push(vec![Cell::from(name), value.into()]);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as borderless aligned text
    pub fn render_text(&self) -> String {
        let mut table = comfy_table::Table::new();
        table.load_preset(NOTHING);
        if self.headers.iter().any(|h| !h.is_empty()) {
            table.set_header(&self.headers);
        }
        for row in &self.rows {
            table.add_row(row.iter().map(|cell| cell.to_string()));
        }
        table.to_string()
    }
}
