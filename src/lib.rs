//! Subnet arithmetic for IPv4 and IPv6.
//!
//! Parse an address with a prefix length or mask into a [`Subnet`], then ask it
//! for its mask, network and broadcast addresses, host count and siblings.
//!
//! ```
//! use subnet_math::Subnet;
//! let s = Subnet::parse("192.168.20.15", "255.255.254.0").unwrap();
//! assert_eq!(s.to_string(), "192.168.20.15/23");
//! assert_eq!(s.network().unwrap().to_string(), "192.168.20.0");
//! assert_eq!(s.broadcast().unwrap().to_string(), "192.168.21.255");
//! assert_eq!(s.host_count().unwrap().to_string(), "512");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Result, SubnetError};
pub use models::{Family, Subnet};
