//! API credential resolution from multiple sources

use ::config::{Config, ConfigError, File, FileFormat};
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::{api, credentials};
use crate::error::{Result, SlError};

/// Username, API key and endpoint for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
    pub endpoint: String,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn env_value(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok().as_deref())
}

fn config_error(err: ConfigError) -> SlError {
    SlError::Config(err.to_string())
}

/// Config key of a credential field inside the `[softlayer]` section
fn section_key(field: &str) -> String {
    format!("{}.{}", credentials::FILE_SECTION, field)
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    config_path: Option<PathBuf>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver {
    /// Resolver reading `~/.softlayer` as the last source
    pub fn new() -> Self {
        Self {
            config_path: dirs::home_dir().map(|home| home.join(credentials::FILE_NAME)),
        }
    }

    /// Resolver reading an explicit config file
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Resolve credentials, each value independently:
    /// 1. CLI arguments
    /// 2. Environment variables (SL_USERNAME, SL_API_KEY, SL_ENDPOINT_URL)
    /// 3. Config file (~/.softlayer)
    pub fn resolve(
        &self,
        cli_username: Option<&str>,
        cli_api_key: Option<&str>,
        cli_endpoint: Option<&str>,
    ) -> Result<Credentials> {
        let mut builder = Config::builder();
        if let Some(path) = &self.config_path {
            debug!("Looking for config file at: {}", path.display());
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Ini)
                    .required(false),
            );
        }

        let sources = [
            (credentials::USERNAME_KEY, credentials::USERNAME_ENV_VAR, cli_username),
            (credentials::API_KEY_KEY, credentials::API_KEY_ENV_VAR, cli_api_key),
            (credentials::ENDPOINT_KEY, credentials::ENDPOINT_ENV_VAR, cli_endpoint),
        ];
        // Later overrides replace earlier ones: env beats the file, CLI beats env
        for (field, env_var, _) in &sources {
            builder = builder
                .set_override_option(section_key(field), env_value(env_var))
                .map_err(config_error)?;
        }
        for (field, _, cli_value) in &sources {
            builder = builder
                .set_override_option(section_key(field), non_empty(*cli_value))
                .map_err(config_error)?;
        }

        let settings = builder.build().map_err(|e| {
            SlError::Config(format!("Could not read config file: {}", e))
        })?;
        let lookup = |field: &str| {
            settings
                .get_string(&section_key(field))
                .ok()
                .and_then(|v| non_empty(Some(&v)))
        };

        match (
            lookup(credentials::USERNAME_KEY),
            lookup(credentials::API_KEY_KEY),
        ) {
            (Some(username), Some(api_key)) => {
                let endpoint = lookup(credentials::ENDPOINT_KEY)
                    .unwrap_or_else(|| api::DEFAULT_ENDPOINT.to_string());
                debug!("Using SoftLayer user '{}' at {}", username, endpoint);
                Ok(Credentials {
                    username,
                    api_key,
                    endpoint,
                })
            }
            _ => Err(SlError::CredentialsNotFound(
                self.not_found_message(self.config_path.as_deref()),
            )),
        }
    }

    fn not_found_message(&self, config_path: Option<&Path>) -> String {
        let file_info = config_path
            .map(|p| format!(" or in config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No SoftLayer credentials found. Provide them using one of:\n\
             \n\
             1. CLI arguments:     slctl --api-username <USER> --api-key <KEY>\n\
             2. Environment vars:  export {}=<USER> {}=<KEY>\n\
             3. Config file:       ~/{} with a [{}] section (username, api_key)\n\
             \n\
             Checked: CLI, env vars{}",
            credentials::USERNAME_ENV_VAR,
            credentials::API_KEY_ENV_VAR,
            credentials::FILE_NAME,
            credentials::FILE_SECTION,
            file_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_values_take_precedence() {
        let resolver = CredentialResolver::with_config_path("/nonexistent/.softlayer");
        let creds = resolver
            .resolve(Some("cli-user"), Some("cli-key"), Some("http://localhost:1"))
            .unwrap();
        assert_eq!(creds.username, "cli-user");
        assert_eq!(creds.api_key, "cli-key");
        assert_eq!(creds.endpoint, "http://localhost:1");
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_config_file_reads_softlayer_section() {
        let file = config_file(
            "[other]\nusername = wrong\n\n[softlayer]\nusername = alice\napi_key = abc123\nendpoint_url = https://api.example.com/rest/v3.1\ntimeout = 10\n",
        );
        let creds = CredentialResolver::with_config_path(file.path())
            .resolve(None, None, None)
            .unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.api_key, "abc123");
        assert_eq!(creds.endpoint, "https://api.example.com/rest/v3.1");
    }

    #[test]
    fn test_config_file_unquotes_values() {
        let file = config_file("[softlayer]\nusername = \"bob\"\napi_key = \"abc\"\n");
        let creds = CredentialResolver::with_config_path(file.path())
            .resolve(None, None, None)
            .unwrap();
        assert_eq!(creds.username, "bob");
        assert_eq!(creds.api_key, "abc");
    }

    #[test]
    fn test_config_file_blank_value_counts_as_missing() {
        let file = config_file("# comment\n[softlayer]\napi_key =\nusername=bob\n");
        let err = CredentialResolver::with_config_path(file.path())
            .resolve(None, None, None)
            .unwrap_err();
        assert!(matches!(err, SlError::CredentialsNotFound(_)));

        let creds = CredentialResolver::with_config_path(file.path())
            .resolve(None, Some("cli-key"), None)
            .unwrap();
        assert_eq!(creds.username, "bob");
        assert_eq!(creds.api_key, "cli-key");
    }

    #[test]
    fn test_config_file_fills_missing_values() {
        let file = config_file("[softlayer]\nusername = file-user\napi_key = file-key\n");

        let resolver = CredentialResolver::with_config_path(file.path());
        let creds = resolver
            .resolve(Some("cli-user"), Some("cli-key"), None)
            .unwrap();
        assert_eq!(creds.username, "cli-user");
        assert!(!creds.endpoint.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_an_error_when_cli_complete() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = CredentialResolver::with_config_path(dir.path().join("missing"));
        assert!(resolver.resolve(Some("u"), Some("k"), None).is_ok());
    }

    #[test]
    fn test_not_found_message_mentions_sources() {
        let resolver = CredentialResolver::with_config_path("/home/user/.softlayer");
        let msg = resolver.not_found_message(Some(Path::new("/home/user/.softlayer")));
        assert!(msg.contains("--api-key"));
        assert!(msg.contains("SL_USERNAME"));
        assert!(msg.contains("/home/user/.softlayer"));
    }
}
