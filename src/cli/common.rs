//! Common CLI types shared across commands

use clap::Args;

use crate::config::defaults;
use crate::error::{Result, SlError};
use crate::output::OutputFormat;
use crate::query::ListQuery;

/// Column selection and output format for list commands
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// Column to display. Can be repeated or comma-separated
    #[arg(long, value_delimiter = ',')]
    pub column: Vec<String>,

    #[arg(long, value_delimiter = ',', hide = true)]
    pub columns: Vec<String>,

    /// Output format: table, json or csv
    #[arg(short = 'o', long, default_value = defaults::OUTPUT)]
    pub output: String,
}

impl SelectArgs {
    /// Build the list query; the output token is checked first
    pub fn query(&self, sort_by: Option<&str>) -> Result<ListQuery> {
        ListQuery::new(&self.output, sort_by, &self.column, &self.columns)
    }
}

/// Arguments for commands showing one object
#[derive(Args, Debug, Clone)]
pub struct DetailArgs {
    /// Object ID
    pub id: String,

    /// Output format: table, json or csv
    #[arg(short = 'o', long, default_value = defaults::OUTPUT)]
    pub output: String,
}

impl DetailArgs {
    pub fn format(&self) -> Result<OutputFormat> {
        self.output.parse()
    }
}

/// Parse a positional identifier that must be a positive integer
pub fn parse_id(what: &str, input: &str) -> Result<u64> {
    match input.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SlError::InvalidId {
            what: what.to_string(),
            input: input.to_string(),
        }),
    }
}
