//! IPv4 address value type and borrowed-bits math.
//!
//! Provides the [`Address`] struct used everywhere in the calculator, the
//! [`AddressClass`] label, and the mask/count functions derived from the
//! number of borrowed host bits.

use crate::error::SubnetError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of host bits in the last octet of a Class C block.
pub const HOST_BITS: u8 = 8;

/// Maximum host bits that may be borrowed for subnetting.
///
/// Capped at 6 (not 7) so every subnet keeps at least two usable hosts.
pub const MAX_BORROWED_BITS: u8 = 6;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

fn check_borrowed_bits(borrowed_bits: u8) -> Result<(), SubnetError> {
    if borrowed_bits > MAX_BORROWED_BITS {
        Err(SubnetError::InvalidBorrowedBits(borrowed_bits))
    } else {
        Ok(())
    }
}

/// Subnet mask for the given number of borrowed bits.
///
/// The first three octets are always 255; the fourth is
/// `256 - 2^(8 - borrowed_bits)`, or 0 when nothing is borrowed.
///
/// # Examples
/// ```
/// use classc_subnet_calc::models::{subnet_mask, Address};
/// assert_eq!(subnet_mask(2).unwrap(), Address::new(255, 255, 255, 192));
/// ```
pub fn subnet_mask(borrowed_bits: u8) -> Result<Address, SubnetError> {
    check_borrowed_bits(borrowed_bits)?;
    let fourth = if borrowed_bits == 0 {
        0
    } else {
        256u16 - (1u16 << (HOST_BITS - borrowed_bits))
    };
    Ok(Address::new(255, 255, 255, fourth as u8))
}

/// Number of subnets the borrowed bits produce (1 when nothing is borrowed).
pub fn max_subnets(borrowed_bits: u8) -> Result<u32, SubnetError> {
    check_borrowed_bits(borrowed_bits)?;
    if borrowed_bits == 0 {
        Ok(1)
    } else {
        Ok(1u32 << borrowed_bits)
    }
}

/// Usable hosts per subnet, excluding the network and broadcast addresses.
pub fn max_hosts(borrowed_bits: u8) -> Result<u32, SubnetError> {
    check_borrowed_bits(borrowed_bits)?;
    Ok((1u32 << (HOST_BITS - borrowed_bits)) - 2)
}

/// Classful label of an address, from its first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    /// First octet 0, outside the classful ranges.
    Unknown,
}

impl AddressClass {
    /// Look up the class for a first octet.
    pub fn of(first_octet: u8) -> AddressClass {
        match first_octet {
            0 => AddressClass::Unknown,
            1..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            _ => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// A four-octet IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 4]);

impl Address {
    /// Create an [`Address`] from its four octets.
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Address {
        Address([a, b, c, d])
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Copy of this address with the last octet replaced.
    pub fn with_last_octet(self, octet: u8) -> Address {
        Address([self.0[0], self.0[1], self.0[2], octet])
    }

    /// Network address of the undivided block (last octet 0).
    pub fn network_address(self) -> Address {
        self.with_last_octet(0)
    }

    /// Broadcast address of the undivided block (last octet 255).
    pub fn broadcast_address(self) -> Address {
        self.with_last_octet(255)
    }

    /// Classful label for this address.
    pub fn class(self) -> AddressClass {
        AddressClass::of(self.0[0])
    }
}

impl FromStr for Address {
    type Err = SubnetError;

    /// Parse a dotted-quad string such as `"192.168.1.10"`.
    ///
    /// Each group must be a decimal value in 0-255. Leading zeros are
    /// tolerated; out-of-range groups are rejected.
    fn from_str(input: &str) -> Result<Address, SubnetError> {
        let invalid = || SubnetError::InvalidAddress {
            input: input.to_string(),
        };
        let caps = DOTTED_QUAD.captures(input.trim()).ok_or_else(invalid)?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            // \d{1,3} always parses as u16; the range check is the real gate
            let value: u16 = caps[i + 1].parse().map_err(|_| invalid())?;
            if value > 255 {
                return Err(invalid());
            }
            *octet = value as u8;
        }
        Ok(Address(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format("."))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let addr: Address = "192.168.1.1".parse().unwrap();
        assert_eq!(addr.octets(), [192, 168, 1, 1]);

        let addr: Address = "  10.0.0.254 ".parse().unwrap();
        assert_eq!(addr, Address::new(10, 0, 0, 254));

        // leading zeros are a formatting quirk, not an error
        let addr: Address = "010.001.0.1".parse().unwrap();
        assert_eq!(addr, Address::new(10, 1, 0, 1));
    }

    #[test]
    fn test_parse_address_rejects_garbage() {
        for input in ["abc", "1.2.3", "1.2.3.4.5", "1.2.3.", "1,2,3,4", ""] {
            let err = input.parse::<Address>().unwrap_err();
            assert_eq!(
                err,
                SubnetError::InvalidAddress {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_address_rejects_out_of_range_octets() {
        assert!("256.1.1.1".parse::<Address>().is_err());
        assert!("1.1.1.999".parse::<Address>().is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(AddressClass::of(0), AddressClass::Unknown);
        assert_eq!(AddressClass::of(1), AddressClass::A);
        assert_eq!(AddressClass::of(127), AddressClass::A);
        assert_eq!(AddressClass::of(128), AddressClass::B);
        assert_eq!(AddressClass::of(191), AddressClass::B);
        assert_eq!(AddressClass::of(192), AddressClass::C);
        assert_eq!(AddressClass::of(223), AddressClass::C);
        assert_eq!(AddressClass::of(224), AddressClass::D);
        assert_eq!(AddressClass::of(239), AddressClass::D);
        assert_eq!(AddressClass::of(240), AddressClass::E);
        assert_eq!(AddressClass::of(255), AddressClass::E);
        assert_eq!(Address::new(192, 168, 1, 1).class(), AddressClass::C);
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0).unwrap(), Address::new(255, 255, 255, 0));
        assert_eq!(subnet_mask(1).unwrap(), Address::new(255, 255, 255, 128));
        assert_eq!(subnet_mask(2).unwrap(), Address::new(255, 255, 255, 192));
        assert_eq!(subnet_mask(3).unwrap(), Address::new(255, 255, 255, 224));
        assert_eq!(subnet_mask(6).unwrap(), Address::new(255, 255, 255, 252));
        assert_eq!(subnet_mask(7).unwrap_err(), SubnetError::InvalidBorrowedBits(7));
    }

    #[test]
    fn test_max_subnets() {
        assert_eq!(max_subnets(0).unwrap(), 1);
        assert_eq!(max_subnets(1).unwrap(), 2);
        assert_eq!(max_subnets(3).unwrap(), 8);
        assert_eq!(max_subnets(6).unwrap(), 64);
        assert!(max_subnets(7).is_err());
    }

    #[test]
    fn test_max_hosts() {
        assert_eq!(max_hosts(0).unwrap(), 254);
        assert_eq!(max_hosts(2).unwrap(), 62);
        assert_eq!(max_hosts(3).unwrap(), 30);
        assert_eq!(max_hosts(6).unwrap(), 2);
        assert!(max_hosts(255).is_err());
    }

    #[test]
    fn test_block_addresses() {
        let addr = Address::new(192, 168, 1, 10);
        assert_eq!(addr.network_address(), Address::new(192, 168, 1, 0));
        assert_eq!(addr.broadcast_address(), Address::new(192, 168, 1, 255));
        assert_eq!(addr.with_last_octet(63), Address::new(192, 168, 1, 63));
    }

    #[test]
    fn test_display_and_serde_roundtrip() {
        let addr = Address::new(172, 16, 5, 200);
        assert_eq!(addr.to_string(), "172.16.5.200");

        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#""172.16.5.200""#);
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
