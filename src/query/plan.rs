//! One list invocation: parse and validate up front, then sort and render
//! whatever the transport returns

use log::debug;
use serde::Serialize;

use super::columns::{build_table, ColumnFlag, ColumnRegistry, ColumnSpec};
use crate::error::Result;
use crate::output::{render, OutputFormat};

/// The user's selection for a list command, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub format: OutputFormat,
    /// Empty means the resource's default sort
    pub sort_by: String,
    pub columns: Vec<String>,
    pub flag: ColumnFlag,
}

impl ListQuery {
    /// Parse the output token first; `--column` wins over `--columns`
    pub fn new(
        output: &str,
        sort_by: Option<&str>,
        column: &[String],
        columns: &[String],
    ) -> Result<Self> {
        let format = output.parse()?;
        let (columns, flag) = if !column.is_empty() {
            (column.to_vec(), ColumnFlag::Column)
        } else if !columns.is_empty() {
            (columns.to_vec(), ColumnFlag::Columns)
        } else {
            (Vec::new(), ColumnFlag::Column)
        };
        Ok(Self {
            format,
            sort_by: sort_by.unwrap_or_default().trim().to_string(),
            columns,
            flag,
        })
    }
}

/// A validated list query bound to one resource registry
pub struct ListPlan<T: 'static> {
    registry: &'static ColumnRegistry<T>,
    pub format: OutputFormat,
    pub columns: Vec<&'static ColumnSpec<T>>,
    pub sort_by: String,
    pub mask: String,
}

impl<T: 'static> ColumnRegistry<T> {
    /// Validate a query and compute the field mask; no I/O happens here
    pub fn plan(&'static self, query: &ListQuery) -> Result<ListPlan<T>> {
        let sort_by = self.effective_sort(&query.sort_by).to_string();
        let columns = self.resolve(&sort_by, &query.columns, query.flag)?;
        let mask = self.mask(&columns, &sort_by);
        Ok(ListPlan {
            registry: self,
            format: query.format,
            columns,
            sort_by,
            mask,
        })
    }
}

impl<T: Serialize + 'static> ListPlan<T> {
    /// Sort fetched records and render them in the chosen format
    pub fn present(&self, mut records: Vec<T>) -> Result<String> {
        debug!(
            "Presenting {} {} records as {}",
            records.len(),
            self.registry.resource,
            self.format
        );
        self.registry.sort(&mut records, &self.sort_by);
        let table = build_table(&self.columns, &records);
        render(&records, &table, self.format)
    }
}
