//! Object filter builder
//!
//! SoftLayer filters are nested JSON objects keyed by relationship path,
//! with an `operation` leaf, e.g.
//! `{"hardware":{"hostname":{"operation":"^= web"}}}`.

use serde_json::{Map, Value};

/// Nested filter document
#[derive(Debug, Clone, Default)]
pub struct ObjectFilter {
    root: Map<String, Value>,
}

/// Turn user input with optional `*` wildcards into a filter operation
///
/// `*x*` contains, `*x` ends with, `x*` begins with, anything else is a
/// case-insensitive match.
pub fn query_op(value: &str) -> String {
    let value = value.trim();
    let starts = value.starts_with('*');
    let ends = value.len() > 1 && value.ends_with('*');
    let inner = value.trim_matches('*');
    match (starts, ends) {
        (true, true) => format!("*= {}", inner),
        (true, false) => format!("$= {}", inner),
        (false, true) => format!("^= {}", inner),
        (false, false) => format!("_= {}", inner),
    }
}

impl ObjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `operation` at a dotted path; a later call on the same path wins
    pub fn with(mut self, path: &str, operation: impl Into<Value>) -> Self {
        let mut node = &mut self.root;
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            node = match entry {
                Value::Object(map) => map,
                _ => unreachable!("entry was just made an object"),
            };
        }
        node.insert("operation".to_string(), operation.into());
        self
    }

    /// Add a wildcard match when the user supplied a non-empty value
    pub fn matching(self, path: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.with(path, query_op(v)),
            None => self,
        }
    }

    /// Add an exact match when the user supplied a non-empty value
    pub fn equals(self, path: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.with(path, v.to_string()),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Serialized document, or `None` when no condition was added
    pub fn build(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(Value::Object(self.root.clone()).to_string())
    }
}
