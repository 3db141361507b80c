use std::fmt;

/// Custom error type for slctl operations
#[derive(Debug)]
pub enum SlError {
    /// `--column` named a column the resource does not have
    InvalidColumn(String),
    /// Hidden `--columns` flag named a column the resource does not have
    InvalidColumns(String),
    /// `--sortby` named a key the resource cannot be sorted by
    UnsupportedSortKey(String),
    /// `--output` token is not one of table, json, csv
    UnsupportedOutputFormat(String),
    /// Positional identifier is not a positive integer
    InvalidId { what: String, input: String },
    /// The single upstream fetch of a command failed
    Upstream { context: String, message: String },
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// No API credentials in any source
    CredentialsNotFound(String),
    /// Configuration error
    Config(String),
}

impl SlError {
    /// Wrap a transport failure with the command's context line.
    /// Credential errors are not transport failures and pass through.
    pub fn upstream(context: impl Into<String>, err: SlError) -> Self {
        match err {
            SlError::CredentialsNotFound(_) | SlError::Config(_) => err,
            err => SlError::Upstream {
                context: context.into(),
                message: err.to_string(),
            },
        }
    }

    /// Errors caused by how the command was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SlError::InvalidColumn(_)
                | SlError::InvalidColumns(_)
                | SlError::UnsupportedSortKey(_)
                | SlError::UnsupportedOutputFormat(_)
                | SlError::InvalidId { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_usage() => 1,
            SlError::CredentialsNotFound(_) | SlError::Config(_) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for SlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlError::InvalidColumn(col) => {
                write!(f, "Incorrect Usage: --column {} is not supported.", col)
            }
            SlError::InvalidColumns(col) => {
                write!(f, "Incorrect Usage: --columns {} is not supported.", col)
            }
            SlError::UnsupportedSortKey(key) => {
                write!(f, "Incorrect Usage: --sortby {} is not supported.", key)
            }
            SlError::UnsupportedOutputFormat(token) => write!(
                f,
                "Incorrect Usage: --output {} is not supported. Options are: table, json, csv.",
                token
            ),
            SlError::InvalidId { what, input } => write!(
                f,
                "Invalid input for '{}': '{}'. It must be a positive integer.",
                what, input
            ),
            SlError::Upstream { context, message } => write!(f, "{}\n{}", context, message),
            SlError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SlError::Api { status, message } => {
                write!(f, "SoftLayer API error (status {}): {}", status, message)
            }
            SlError::Json(msg) => write!(f, "JSON error: {}", msg),
            SlError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            SlError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SlError {
    fn from(err: reqwest::Error) -> Self {
        SlError::Http(err)
    }
}

impl From<serde_json::Error> for SlError {
    fn from(err: serde_json::Error) -> Self {
        SlError::Json(err.to_string())
    }
}

impl From<std::io::Error> for SlError {
    fn from(err: std::io::Error) -> Self {
        SlError::Config(err.to_string())
    }
}

/// Result type alias for slctl operations
pub type Result<T> = std::result::Result<T, SlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_names_the_flag_and_key() {
        let err = SlError::InvalidColumn("abc".to_string());
        assert_eq!(err.to_string(), "Incorrect Usage: --column abc is not supported.");
    }

    #[test]
    fn test_invalid_columns_uses_plural_flag() {
        let err = SlError::InvalidColumns("abc".to_string());
        assert_eq!(err.to_string(), "Incorrect Usage: --columns abc is not supported.");
    }

    #[test]
    fn test_unsupported_sort_key_display() {
        let err = SlError::UnsupportedSortKey("bogus".to_string());
        assert!(err.to_string().contains("--sortby bogus is not supported."));
    }

    #[test]
    fn test_unsupported_output_format_display() {
        let err = SlError::UnsupportedOutputFormat("xml".to_string());
        assert!(err.to_string().contains("--output xml"));
    }

    #[test]
    fn test_upstream_appends_original_message() {
        let err = SlError::upstream(
            "Failed to list subnets on your account.",
            SlError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            },
        );
        let text = err.to_string();
        assert!(text.starts_with("Failed to list subnets on your account.\n"));
        assert!(text.contains("Internal Server Error"));
    }

    #[test]
    fn test_upstream_keeps_credential_errors() {
        let err = SlError::upstream(
            "Failed to get hardware servers on your account.",
            SlError::CredentialsNotFound("No SoftLayer credentials found.".to_string()),
        );
        assert!(matches!(err, SlError::CredentialsNotFound(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        assert!(SlError::UnsupportedSortKey("x".into()).is_usage());
        assert_eq!(SlError::InvalidColumn("x".into()).exit_code(), 1);
        assert_eq!(SlError::UnsupportedOutputFormat("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_upstream_errors_exit_with_two() {
        let err = SlError::Upstream {
            context: "ctx".into(),
            message: "boom".into(),
        };
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SlError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SlError = json_err.into();
        match err {
            SlError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected SlError::Json"),
        }
    }

    #[test]
    fn test_error_source_is_none_for_non_http() {
        use std::error::Error;
        let err = SlError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
