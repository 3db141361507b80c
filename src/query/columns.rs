//! Column registries and column selection validation
//!
//! Each resource type owns one static [`ColumnRegistry`]: the default and
//! optional column pools, the remote field path behind every column, and the
//! comparator table for its sortable keys.

use std::fmt;

use log::debug;

use super::mask::build_mask;
use super::sort::{sort_records, Less, SortKey};
use crate::error::{Result, SlError};
use crate::output::Table;

/// Which selection flag the user spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnFlag {
    #[default]
    Column,
    /// Hidden plural alias
    Columns,
}

/// One displayable column of a resource type
pub struct ColumnSpec<T: 'static> {
    /// Key accepted by `--column` and `--sortby`
    pub key: &'static str,
    /// Header shown in table and CSV output
    pub header: &'static str,
    /// Remote field path fetched for this column
    pub mask: &'static str,
    /// Display formatter
    pub format: fn(&T) -> String,
}

impl<T: 'static> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("mask", &self.mask)
            .finish()
    }
}

/// Column pools and sort strategies for one resource type
pub struct ColumnRegistry<T: 'static> {
    pub resource: &'static str,
    /// Paths fetched regardless of the selected columns
    pub base_mask: &'static str,
    pub defaults: &'static [ColumnSpec<T>],
    pub optional: &'static [ColumnSpec<T>],
    pub sort_keys: &'static [SortKey<T>],
    /// Sort applied when `--sortby` is not given; empty keeps transport order
    pub default_sort: &'static str,
}

/// Validate a column selection and sort key against a resource's pools
///
/// The sort key is checked first. An empty `requested` list yields the
/// default pool in order.
pub fn validate_columns(
    sort_by: &str,
    requested: &[String],
    defaults: &[&str],
    optional: &[&str],
    sortable: &[&str],
    flag: ColumnFlag,
) -> Result<Vec<String>> {
    if !sort_by.is_empty() && !sortable.contains(&sort_by) {
        return Err(SlError::UnsupportedSortKey(sort_by.to_string()));
    }

    if let Some(bad) = requested
        .iter()
        .find(|c| !defaults.contains(&c.as_str()) && !optional.contains(&c.as_str()))
    {
        return Err(match flag {
            ColumnFlag::Column => SlError::InvalidColumn(bad.clone()),
            ColumnFlag::Columns => SlError::InvalidColumns(bad.clone()),
        });
    }

    if requested.is_empty() {
        return Ok(defaults.iter().map(|c| c.to_string()).collect());
    }
    Ok(requested.to_vec())
}

impl<T: 'static> ColumnRegistry<T> {
    pub fn default_keys(&self) -> Vec<&'static str> {
        self.defaults.iter().map(|c| c.key).collect()
    }

    pub fn optional_keys(&self) -> Vec<&'static str> {
        self.optional.iter().map(|c| c.key).collect()
    }

    pub fn sortable_keys(&self) -> Vec<&'static str> {
        self.sort_keys.iter().map(|s| s.key).collect()
    }

    /// Look up a column in either pool
    pub fn column(&self, key: &str) -> Option<&'static ColumnSpec<T>> {
        self.defaults
            .iter()
            .chain(self.optional.iter())
            .find(|c| c.key == key)
    }

    /// Comparator registered for a sort key
    pub fn comparator(&self, key: &str) -> Option<Less<T>> {
        self.sort_keys.iter().find(|s| s.key == key).map(|s| s.less)
    }

    /// The sort key actually used when `sort_by` may be empty
    pub fn effective_sort<'a>(&self, sort_by: &'a str) -> &'a str {
        if sort_by.is_empty() {
            self.default_sort
        } else {
            sort_by
        }
    }

    /// Validate the user's selection and return the columns to display
    pub fn resolve(
        &self,
        sort_by: &str,
        requested: &[String],
        flag: ColumnFlag,
    ) -> Result<Vec<&'static ColumnSpec<T>>> {
        let keys = validate_columns(
            sort_by,
            requested,
            &self.default_keys(),
            &self.optional_keys(),
            &self.sortable_keys(),
            flag,
        )?;
        debug!("{} columns: {}", self.resource, keys.join(","));
        Ok(keys.iter().filter_map(|k| self.column(k)).collect())
    }

    /// Field mask for the displayed columns plus the sort key
    pub fn mask(&self, columns: &[&'static ColumnSpec<T>], sort_by: &str) -> String {
        let sort_path = if columns.iter().any(|c| c.key == sort_by) {
            None
        } else {
            self.column(sort_by).map(|c| c.mask)
        };

        let mask = build_mask(
            self.base_mask
                .split(',')
                .chain(columns.iter().map(|c| c.mask))
                .chain(sort_path),
        );
        debug!("{} mask: {}", self.resource, mask);
        mask
    }

    /// Order records by a sort key; unknown or empty keys leave them untouched
    pub fn sort(&self, records: &mut Vec<T>, sort_by: &str) {
        if let Some(less) = self.comparator(sort_by) {
            debug!("Sorting {} by {}", self.resource, sort_by);
            sort_records(records, less);
        }
    }
}

/// Build the display table for records, one row per record
pub fn build_table<T>(columns: &[&ColumnSpec<T>], records: &[T]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| c.header));
    for record in records {
        table.add_row(columns.iter().map(|c| (c.format)(record)));
    }
    table
}

/// Type-erased view of a registry
pub trait ColumnPool: Sync {
    fn resource(&self) -> &'static str;
    fn keys(&self) -> Vec<&'static str>;
    fn headers(&self) -> Vec<&'static str>;
    fn sortable(&self) -> Vec<&'static str>;
    fn default_sort(&self) -> &'static str;
}

impl<T: 'static> ColumnPool for ColumnRegistry<T> {
    fn resource(&self) -> &'static str {
        self.resource
    }

    fn keys(&self) -> Vec<&'static str> {
        let mut keys = self.default_keys();
        keys.extend(self.optional_keys());
        keys
    }

    fn headers(&self) -> Vec<&'static str> {
        self.defaults
            .iter()
            .chain(self.optional.iter())
            .map(|c| c.header)
            .collect()
    }

    fn sortable(&self) -> Vec<&'static str> {
        self.sortable_keys()
    }

    fn default_sort(&self) -> &'static str {
        self.default_sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sort::less_opt;

    struct Thing {
        id: Option<i64>,
        name: Option<String>,
        status: Option<String>,
    }

    fn thing(id: i64, name: &str) -> Thing {
        Thing {
            id: Some(id),
            name: Some(name.to_string()),
            status: None,
        }
    }

    static THINGS: ColumnRegistry<Thing> = ColumnRegistry {
        resource: "X",
        base_mask: "",
        defaults: &[
            ColumnSpec {
                key: "id",
                header: "id",
                mask: "id",
                format: |t| t.id.map(|v| v.to_string()).unwrap_or_default(),
            },
            ColumnSpec {
                key: "name",
                header: "name",
                mask: "name",
                format: |t| t.name.clone().unwrap_or_default(),
            },
        ],
        optional: &[ColumnSpec {
            key: "status",
            header: "status",
            mask: "status.name",
            format: |t| t.status.clone().unwrap_or_default(),
        }],
        sort_keys: &[
            SortKey {
                key: "id",
                less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
            },
            SortKey {
                key: "name",
                less: |a, b| less_opt(a.name.as_deref(), b.name.as_deref()),
            },
        ],
        default_sort: "",
    };

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_returns_defaults_when_nothing_requested() {
        let cols = validate_columns("id", &[], &["id", "name"], &["status"], &["id", "name"], ColumnFlag::Column)
            .unwrap();
        assert_eq!(cols, strings(&["id", "name"]));
    }

    #[test]
    fn test_validate_returns_requested_in_order() {
        let cols = validate_columns(
            "",
            &strings(&["status", "id"]),
            &["id", "name"],
            &["status"],
            &["id", "name"],
            ColumnFlag::Column,
        )
        .unwrap();
        assert_eq!(cols, strings(&["status", "id"]));
    }

    #[test]
    fn test_validate_rejects_unknown_sort_key() {
        let err = validate_columns("bogus", &[], &["id", "name"], &["status"], &["id", "name"], ColumnFlag::Column)
            .unwrap_err();
        assert!(matches!(err, SlError::UnsupportedSortKey(ref k) if k == "bogus"));
        assert!(err.to_string().contains("--sortby bogus is not supported."));
    }

    #[test]
    fn test_validate_checks_sort_before_columns() {
        let err = validate_columns(
            "bogus",
            &strings(&["nope"]),
            &["id"],
            &[],
            &["id"],
            ColumnFlag::Column,
        )
        .unwrap_err();
        assert!(matches!(err, SlError::UnsupportedSortKey(_)));
    }

    #[test]
    fn test_validate_names_first_bad_column() {
        let err = validate_columns(
            "",
            &strings(&["id", "abc", "xyz"]),
            &["id", "name"],
            &["status"],
            &["id"],
            ColumnFlag::Column,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: --column abc is not supported.");
    }

    #[test]
    fn test_validate_reports_plural_flag() {
        let err = validate_columns("", &strings(&["abc"]), &["id"], &[], &[], ColumnFlag::Columns)
            .unwrap_err();
        assert!(matches!(err, SlError::InvalidColumns(ref c) if c == "abc"));
    }

    #[test]
    fn test_validate_sort_key_may_be_optional_column() {
        let cols = validate_columns("status", &[], &["id"], &["status"], &["id", "status"], ColumnFlag::Column)
            .unwrap();
        assert_eq!(cols, strings(&["id"]));
    }

    #[test]
    fn test_registry_resolve_and_mask() {
        let cols = THINGS.resolve("id", &[], ColumnFlag::Column).unwrap();
        let keys: Vec<_> = cols.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(THINGS.mask(&cols, "id"), "id,name");
    }

    #[test]
    fn test_registry_mask_appends_hidden_sort_key() {
        let cols = THINGS
            .resolve("name", &strings(&["status"]), ColumnFlag::Column)
            .unwrap();
        assert_eq!(THINGS.mask(&cols, "name"), "status.name,name");
    }

    #[test]
    fn test_registry_resolve_rejects_unknown_column() {
        let err = THINGS
            .resolve("", &strings(&["bogus"]), ColumnFlag::Column)
            .unwrap_err();
        assert!(matches!(err, SlError::InvalidColumn(_)));
    }

    #[test]
    fn test_resolved_columns_debug_shows_key_and_mask() {
        let cols = THINGS
            .resolve("", &strings(&["status"]), ColumnFlag::Column)
            .unwrap();
        let text = format!("{:?}", cols);
        assert!(text.contains("key: \"status\""));
        assert!(text.contains("mask: \"status.name\""));
    }

    #[test]
    fn test_registry_sort_by_id() {
        let mut records = vec![thing(3, "c"), thing(1, "a"), thing(2, "b")];
        THINGS.sort(&mut records, "id");
        let ids: Vec<_> = records.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_registry_empty_sort_keeps_order() {
        let mut records = vec![thing(3, "c"), thing(1, "a")];
        THINGS.sort(&mut records, THINGS.effective_sort(""));
        let ids: Vec<_> = records.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_build_table_rows_follow_records() {
        let cols = THINGS.resolve("", &[], ColumnFlag::Column).unwrap();
        let records = vec![thing(2, "b"), thing(1, "a")];
        let table = build_table(&cols, &records);
        assert_eq!(table.headers(), &["id", "name"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][0].to_string(), "2");
    }

    #[test]
    fn test_pool_view_lists_all_keys() {
        let pool: &dyn ColumnPool = &THINGS;
        assert_eq!(pool.resource(), "X");
        assert_eq!(pool.keys(), vec!["id", "name", "status"]);
        assert_eq!(pool.sortable(), vec!["id", "name"]);
    }
}
