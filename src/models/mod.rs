//! Subnet engine models.
//!
//! - [`Subnet`] - address with prefix length and its derived values
//! - [`Family`] - IPv4/IPv6 widths
//! - [`mask`] - prefix length and mask conversion, text validation
//! - [`bytes`] - byte-wise network/broadcast arithmetic

pub mod bytes;
mod family;
pub mod mask;
mod subnet;

// Re-export public types
pub use bytes::{addr_bytes, addr_from_slice, broadcast_bytes, fill_empty_bytes, network_bytes};
pub use family::Family;
pub use mask::{bits_to_mask, mask_to_bits, parse_addr, parse_mask, parse_prefix_len, MAX_LENGTH};
pub use subnet::Subnet;
