//! Column selection, field masks and record ordering

pub mod columns;
pub mod mask;
pub mod plan;
pub mod sort;

pub use columns::{build_table, validate_columns, ColumnFlag, ColumnPool, ColumnRegistry, ColumnSpec};
pub use mask::build_mask;
pub use plan::{ListPlan, ListQuery};
pub use sort::{greater_opt, less_numeric_str, less_opt, sort_records, Less, SortKey};
