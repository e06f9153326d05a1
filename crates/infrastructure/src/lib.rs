//! Ferrous Sinkhole Infrastructure Layer
pub mod dns;
