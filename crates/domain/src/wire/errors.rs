use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Malformed DNS message: {0}")]
    MalformedInput(&'static str),

    #[error("Response needs {needed} bytes but only {capacity} are available")]
    EncodeOverflow { needed: usize, capacity: usize },

    #[error("Invalid synthetic address: {0}")]
    InvalidSyntheticAddress(String),
}
