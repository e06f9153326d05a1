//! Ferrous Sinkhole Domain Layer
pub mod blocklist;
pub mod config;
pub mod errors;
pub mod record_type;
pub mod relay_settings;
pub mod response_mode;
pub mod wire;

pub use blocklist::Blocklist;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use record_type::RecordType;
pub use relay_settings::RelaySettings;
pub use response_mode::{ResponseKind, ResponseMode};
pub use wire::{DecodedQuestion, WireError, MAX_MESSAGE_LEN};
