use super::errors::ConfigError;
use crate::response_mode::{ResponseKind, ResponseMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    #[serde(default)]
    pub response: ResponseKind,

    /// Address returned in `FAKE` mode.
    #[serde(default = "default_fake_ip")]
    pub fake_ip: String,

    /// TTL of the synthetic A record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl BlockingConfig {
    pub fn response_mode(&self) -> Result<ResponseMode, ConfigError> {
        ResponseMode::from_config(self.response, &self.fake_ip)
    }
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            response: ResponseKind::default(),
            fake_ip: default_fake_ip(),
            ttl: default_ttl(),
            blacklist: vec![],
        }
    }
}

fn default_fake_ip() -> String {
    "127.0.0.1".to_string()
}

fn default_ttl() -> u32 {
    300
}
