use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Response mode as written in configuration: `FAKE`, `NXDOMAIN` or `REFUSED`
/// (any case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResponseKind {
    #[default]
    Fake,
    NxDomain,
    Refused,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fake => "FAKE",
            Self::NxDomain => "NXDOMAIN",
            Self::Refused => "REFUSED",
        }
    }
}

impl FromStr for ResponseKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FAKE" => Ok(Self::Fake),
            "NXDOMAIN" => Ok(Self::NxDomain),
            "REFUSED" => Ok(Self::Refused),
            _ => Err(ConfigError::InvalidResponseMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ResponseKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResponseKind> for String {
    fn from(kind: ResponseKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How every blocked query is answered. Fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    SyntheticAddress(Ipv4Addr),
    NameError,
    Refused,
}

impl ResponseMode {
    /// Combines the configured kind with the synthetic address text. The
    /// address is only parsed (and only required) in `FAKE` mode.
    pub fn from_config(kind: ResponseKind, fake_ip: &str) -> Result<Self, ConfigError> {
        match kind {
            ResponseKind::Fake => fake_ip
                .trim()
                .parse()
                .map(Self::SyntheticAddress)
                .map_err(|_| ConfigError::InvalidSyntheticAddress(fake_ip.to_string())),
            ResponseKind::NxDomain => Ok(Self::NameError),
            ResponseKind::Refused => Ok(Self::Refused),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        match self {
            Self::SyntheticAddress(_) => ResponseKind::Fake,
            Self::NameError => ResponseKind::NxDomain,
            Self::Refused => ResponseKind::Refused,
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SyntheticAddress(address) => write!(f, "FAKE({})", address),
            Self::NameError => f.write_str("NXDOMAIN"),
            Self::Refused => f.write_str("REFUSED"),
        }
    }
}
