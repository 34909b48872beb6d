//! Fixed-width byte arithmetic shared by every subnet derivation.
//!
//! Addresses are handled as plain big-endian byte sequences so that IPv4 and
//! IPv6 go through the same code; only the width differs.

use super::Family;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Big-endian bytes of an address (4 for IPv4, 16 for IPv6).
pub fn addr_bytes(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// Build an address back from its bytes. Returns `None` unless the slice is
/// exactly 4 or 16 bytes long.
pub fn addr_from_slice(bytes: &[u8]) -> Option<IpAddr> {
    match bytes.len() {
        4 => <[u8; 4]>::try_from(bytes)
            .ok()
            .map(|b| IpAddr::V4(Ipv4Addr::from(b))),
        16 => <[u8; 16]>::try_from(bytes)
            .ok()
            .map(|b| IpAddr::V6(Ipv6Addr::from(b))),
        _ => None,
    }
}

/// Network bytes: `addr & mask` per byte.
pub fn network_bytes(addr: &[u8], mask: &[u8]) -> Vec<u8> {
    debug_assert_eq!(addr.len(), mask.len(), "address and mask width differ");
    addr.iter().zip(mask).map(|(a, m)| a & m).collect()
}

/// Broadcast bytes: `addr | !mask` per byte.
pub fn broadcast_bytes(addr: &[u8], mask: &[u8]) -> Vec<u8> {
    debug_assert_eq!(addr.len(), mask.len(), "address and mask width differ");
    addr.iter().zip(mask).map(|(a, m)| a | !m).collect()
}

/// Zero-pad `bytes` up to the width of `family`. Longer input is returned as is.
pub fn fill_empty_bytes(mut bytes: Vec<u8>, family: Family) -> Vec<u8> {
    let width = family.width();
    if bytes.len() < width {
        bytes.resize(width, 0);
    }
    bytes
}
