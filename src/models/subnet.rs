//! Subnet value: an address paired with a prefix length.
//!
//! Provides [`Subnet`] and the values derived from it (mask, network,
//! broadcast, host count and sibling subnets). Both address families share
//! one code path over the address bytes.

use super::bytes::{
    addr_bytes, addr_from_slice, broadcast_bytes, fill_empty_bytes, network_bytes,
};
use super::mask::{bits_to_mask, mask_to_bits, parse_addr, parse_mask, parse_prefix_len};
use super::Family;
use crate::error::{Result, SubnetError};
use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

/// An IPv4 or IPv6 address with its prefix length.
///
/// The address is kept as given (host bits are not cleared), so
/// `192.168.20.15/23` renders back unchanged; use [`Subnet::network`] for the
/// network address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    addr: IpAddr,
    prefix_len: u8,
}

impl Subnet {
    fn from_parts(addr: IpAddr, prefix_len: u8) -> Result<Subnet> {
        if prefix_len > Family::of(&addr).bits() {
            return Err(SubnetError::InvalidPrefixLength(prefix_len.to_string()));
        }
        Ok(Subnet { addr, prefix_len })
    }

    /// Create a [`Subnet`] from an address and a prefix length.
    ///
    /// # Examples
    /// ```
    /// use subnet_math::Subnet;
    /// let s = Subnet::parse_prefix("10.1.2.3", 8).unwrap();
    /// assert_eq!(s.to_string(), "10.1.2.3/8");
    /// assert!(Subnet::parse_prefix("10.1.2.3", 33).is_err());
    /// ```
    pub fn parse_prefix(addr_text: &str, bits: u8) -> Result<Subnet> {
        log::debug!("parse_prefix({addr_text}, {bits})");
        let addr = parse_addr(addr_text)?;
        Subnet::from_parts(addr, bits)
    }

    /// Create a [`Subnet`] from an address and a mask in address form,
    /// e.g. `("172.16.0.0", "255.255.248.0")`.
    ///
    /// The mask may be of the other family; only its bit count is used. The
    /// call fails with [`SubnetError::InvalidSubnet`] when that count does not
    /// fit the address family.
    pub fn parse(addr_text: &str, mask_text: &str) -> Result<Subnet> {
        log::debug!("parse({addr_text}, {mask_text})");
        let addr = parse_addr(addr_text)?;
        let mask = parse_mask(mask_text)?;
        let bits = mask_to_bits(&mask)?;

        let family = Family::of(&addr);
        if family != Family::of(&mask) {
            log::debug!("parse() {family} address with {} mask", Family::of(&mask));
        }
        if bits > family.bits() {
            return Err(SubnetError::InvalidSubnet(format!(
                "{addr_text} with mask {mask_text}"
            )));
        }
        Subnet::from_parts(addr, bits)
    }

    /// Create a [`Subnet`] from CIDR text such as `"192.168.20.15/23"`.
    ///
    /// The part after `/` may also be a mask address (`"10.0.0.0/255.0.0.0"`).
    pub fn parse_cidr(text: &str) -> Result<Subnet> {
        let text = text.trim();
        let (addr_text, suffix) = text
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidSubnet(text.to_string()))?;
        if suffix.contains(['.', ':']) {
            return Subnet::parse(addr_text, suffix);
        }
        log::debug!("parse_cidr({text})");
        let addr = parse_addr(addr_text)?;
        let bits = parse_prefix_len(suffix)?;
        Subnet::from_parts(addr, bits)
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> Family {
        Family::of(&self.addr)
    }

    /// Network mask, e.g. `192.168.20.15/23` -> `255.255.254.0`.
    pub fn mask(&self) -> Result<IpAddr> {
        bits_to_mask(self.prefix_len, self.family())
    }

    /// Network address, e.g. `192.168.20.15/23` -> `192.168.20.0`.
    pub fn network(&self) -> Result<IpAddr> {
        let mask = self.mask()?;
        let bytes = network_bytes(&addr_bytes(&self.addr), &addr_bytes(&mask));
        addr_from_slice(&bytes).ok_or_else(|| SubnetError::InvalidSubnet(self.to_string()))
    }

    /// Broadcast address, e.g. `192.168.20.15/23` -> `192.168.21.255`.
    pub fn broadcast(&self) -> Result<IpAddr> {
        let mask = self.mask()?;
        let bytes = broadcast_bytes(&addr_bytes(&self.addr), &addr_bytes(&mask));
        addr_from_slice(&bytes).ok_or_else(|| SubnetError::InvalidSubnet(self.to_string()))
    }

    /// Total number of addresses in the subnet, `2^(bits - prefix_len)`.
    ///
    /// Exact for every prefix; an IPv6 `/0` holds 2^128 addresses, one more
    /// than `u128::MAX`. Subtract two for the usable IPv4 hosts.
    pub fn host_count(&self) -> Result<BigUint> {
        let width = self.family().bits();
        if self.prefix_len > width {
            return Err(SubnetError::InvalidPrefixLength(self.prefix_len.to_string()));
        }
        Ok(BigUint::from(1u8) << usize::from(width - self.prefix_len))
    }

    /// All subnets with the same prefix length that share this subnet's bytes
    /// up to the first mask byte that is not `0xff`.
    ///
    /// That byte steps by `256 - mask_byte` from zero, the bytes after it are
    /// zero. `10.1.2.3/23` lists `10.1.0.0/23, 10.1.2.0/23, ... 10.1.254.0/23`.
    /// A `/32` or `/128` has no varying byte and lists only itself.
    pub fn siblings(&self) -> Result<Vec<Subnet>> {
        let addr = addr_bytes(&self.addr);
        let mask = addr_bytes(&self.mask()?);

        let Some(varying) = mask.iter().position(|&b| b < u8::MAX) else {
            log::trace!("siblings({self}) mask is saturated");
            return Ok(vec![*self]);
        };
        let step = 256 - usize::from(mask[varying]);
        log::trace!("siblings({self}) byte {varying} step {step}");

        (0..256usize)
            .step_by(step)
            .map(|octet| {
                let mut bytes = addr[..varying].to_vec();
                bytes.push(octet as u8);
                let bytes = fill_empty_bytes(bytes, self.family());
                let addr = addr_from_slice(&bytes)
                    .ok_or_else(|| SubnetError::InvalidSubnet(self.to_string()))?;
                Subnet::from_parts(addr, self.prefix_len)
            })
            .collect()
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Subnet> {
        Subnet::parse_cidr(s)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse_cidr(&s).map_err(|e| de::Error::custom(format!("{e} in \"{s}\"")))
    }
}
