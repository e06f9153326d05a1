//! Flat `key = value` configuration file (`config.txt`).
//!
//! ```text
//! # comment
//! upstream_dns = 1.1.1.1
//! upstream_port = 53
//! response = NXDOMAIN
//! fake_ip = 0.0.0.0
//! listen_port = 5353
//! blacklist = ads.example.com, tracker.example.net
//! ```
//!
//! Blank lines, comments, lines without `=` and unknown keys are skipped.
//! Repeated `blacklist` lines accumulate.

use super::errors::ConfigError;
use super::root::Config;
use std::str::FromStr;

pub(super) fn parse_key_value(contents: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        let line_no = index + 1;

        match key {
            "upstream_dns" => config.upstream.address = value.to_string(),
            "upstream_port" => config.upstream.port = parse_number(key, value, line_no)?,
            "response" => config.blocking.response = value.parse()?,
            "fake_ip" => config.blocking.fake_ip = value.to_string(),
            "listen_port" => config.server.listen_port = parse_number(key, value, line_no)?,
            "blacklist" => config.blocking.blacklist.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string),
            ),
            _ => {}
        }
    }

    Ok(config)
}

fn parse_number<T: FromStr>(key: &str, value: &str, line_no: usize) -> Result<T, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::Parse(format!(
            "line {}: '{}' is not a valid value for {}",
            line_no, value, key
        ))
    })
}
