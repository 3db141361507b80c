/// Configuration constants for the SoftLayer REST API
pub mod api {
    /// Default REST endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

    /// Response encoding suffix appended to every method call
    pub const FORMAT_SUFFIX: &str = ".json";

    /// Account service (lists of account-owned resources)
    pub const ACCOUNT: &str = "SoftLayer_Account";

    /// Network storage service (volumes, snapshots, access lists)
    pub const NETWORK_STORAGE: &str = "SoftLayer_Network_Storage";

    /// Subnet service
    pub const SUBNET: &str = "SoftLayer_Network_Subnet";

    /// Security group service
    pub const SECURITY_GROUP: &str = "SoftLayer_Network_SecurityGroup";

    /// Request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 60;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Config file name (relative to HOME)
    pub const FILE_NAME: &str = ".softlayer";

    /// Section of the config file holding the credentials
    pub const FILE_SECTION: &str = "softlayer";

    /// Keys of the config file section
    pub const USERNAME_KEY: &str = "username";
    pub const API_KEY_KEY: &str = "api_key";
    pub const ENDPOINT_KEY: &str = "endpoint_url";

    /// Environment variable for the API username
    pub const USERNAME_ENV_VAR: &str = "SL_USERNAME";

    /// Environment variable for the API key
    pub const API_KEY_ENV_VAR: &str = "SL_API_KEY";

    /// Environment variable for the endpoint override
    pub const ENDPOINT_ENV_VAR: &str = "SL_ENDPOINT_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default output format token
    pub const OUTPUT: &str = "table";
}
