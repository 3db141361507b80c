//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

mod csv;
pub mod format;
mod json;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SlError};

pub use self::csv::{escape_csv, render_csv};
pub use self::json::to_pretty_json;
pub use self::table::{Cell, Table};

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = SlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(SlError::UnsupportedOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render records in the chosen format
///
/// JSON serializes `records` untouched; table and CSV use the prebuilt
/// `table` so the three targets share one row order.
pub fn render<S: Serialize + ?Sized>(records: &S, table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table.render_text()),
        OutputFormat::Json => to_pretty_json(records),
        OutputFormat::Csv => Ok(render_csv(table)),
    }
}
