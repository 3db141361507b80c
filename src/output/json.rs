//! JSON rendering

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, SlError};

/// Serialize with a four-space indent
pub fn to_pretty_json<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| SlError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        id: Option<i64>,
        host_name: Option<String>,
    }

    #[test]
    fn test_four_space_indent() {
        let json = to_pretty_json(&vec![Sample {
            id: Some(1),
            host_name: Some("web01".to_string()),
        }])
        .unwrap();
        assert!(json.contains("\n        \"id\": 1"));
        assert!(json.contains("\"hostName\": \"web01\""));
    }

    #[test]
    fn test_absent_fields_are_null() {
        let json = to_pretty_json(&Sample {
            id: None,
            host_name: None,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["id"].is_null());
        assert!(value["hostName"].is_null());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_pretty_json(&Vec::<Sample>::new()).unwrap(), "[]");
    }
}
