//! Error types for subnet parsing and arithmetic.

use thiserror::Error;

/// Failure kinds reported by the subnet engine.
///
/// Every variant carries the offending input so callers can decide how to
/// present it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("invalid host address: {0}")]
    InvalidAddress(String),

    #[error("invalid subnet mask: {0}")]
    InvalidSubnetMask(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefixLength(String),

    #[error("invalid subnet: {0}")]
    InvalidSubnet(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;
