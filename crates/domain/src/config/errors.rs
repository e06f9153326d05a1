#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Unknown response mode '{0}' (expected FAKE, NXDOMAIN or REFUSED)")]
    InvalidResponseMode(String),

    #[error("Invalid fake_ip '{0}': expected an IPv4 address")]
    InvalidSyntheticAddress(String),
}
