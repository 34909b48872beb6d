//! Address and mask codec.
//!
//! Converts between prefix lengths and mask addresses, and validates the text
//! forms of addresses, masks and prefix lengths.

use super::bytes::{addr_bytes, addr_from_slice};
use super::Family;
use crate::error::{Result, SubnetError};
use std::net::IpAddr;

/// Longest prefix length of any family (IPv6).
pub const MAX_LENGTH: u8 = 128;

/// Parse a host address in dotted IPv4 or colon-hex IPv6 form.
pub fn parse_addr(text: &str) -> Result<IpAddr> {
    text.parse::<IpAddr>()
        .map_err(|_| SubnetError::InvalidAddress(text.to_string()))
}

/// Parse a mask written as an address (`255.255.254.0`, `ffff:ffff::`).
///
/// Only the address grammar is checked here; contiguity is checked by
/// [`mask_to_bits`].
pub fn parse_mask(text: &str) -> Result<IpAddr> {
    text.parse::<IpAddr>()
        .map_err(|_| SubnetError::InvalidSubnetMask(text.to_string()))
}

/// Parse the numeric part of a CIDR (`24` in `10.0.0.0/24`).
///
/// Accepts plain decimal only: no sign, no leading zeros, at most three digits.
pub fn parse_prefix_len(text: &str) -> Result<u8> {
    let invalid = || SubnetError::InvalidPrefixLength(text.to_string());
    if text.is_empty()
        || text.len() > 3
        || !text.bytes().all(|b| b.is_ascii_digit())
        || (text.len() > 1 && text.starts_with('0'))
    {
        return Err(invalid());
    }
    let bits: u8 = text.parse().map_err(|_| invalid())?;
    if bits > MAX_LENGTH {
        return Err(invalid());
    }
    Ok(bits)
}

/// Convert a prefix length to a mask address of the given family.
///
/// # Examples
/// ```
/// use subnet_math::models::{bits_to_mask, Family};
/// assert_eq!(bits_to_mask(23, Family::V4).unwrap().to_string(), "255.255.254.0");
/// assert_eq!(bits_to_mask(20, Family::V6).unwrap().to_string(), "ffff:f000::");
/// ```
pub fn bits_to_mask(bits: u8, family: Family) -> Result<IpAddr> {
    if bits > MAX_LENGTH || bits > family.bits() {
        return Err(SubnetError::InvalidPrefixLength(bits.to_string()));
    }
    let mask: Vec<u8> = (0..family.width())
        .map(|i| {
            // bits of this byte that belong to the network part, 0..=8
            let left = usize::from(bits).saturating_sub(i * 8).min(8) as u32;
            u8::MAX.checked_shl(8 - left).unwrap_or(0)
        })
        .collect();
    addr_from_slice(&mask).ok_or_else(|| SubnetError::InvalidPrefixLength(bits.to_string()))
}

/// Count the leading 1-bits of a mask address.
///
/// The mask must be contiguous: once a 0-bit has been seen every following
/// bit must be 0 as well, so `255.255.255.251` is rejected.
pub fn mask_to_bits(mask: &IpAddr) -> Result<u8> {
    let mut bits: u8 = 0;
    let mut ended = false;
    for byte in addr_bytes(mask) {
        for shift in (0..8).rev() {
            let set = (byte >> shift) & 1 == 1;
            if set && ended {
                log::debug!("mask_to_bits({mask}) non contiguous after {bits} bits");
                return Err(SubnetError::InvalidSubnetMask(mask.to_string()));
            } else if set {
                bits += 1;
            } else {
                ended = true;
            }
        }
    }
    Ok(bits)
}
