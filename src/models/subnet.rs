//! Subnet row and membership data model.

use super::Address;
use serde::Serialize;

/// One subnet of the partitioned block.
///
/// All four addresses share the first three octets of the base network;
/// only the last octet varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subnet {
    /// Position in the partition, 0-based ascending.
    pub index: usize,
    /// Network address naming the subnet (host bits all zero).
    pub network: Address,
    /// First usable host address.
    pub first_host: Address,
    /// Last usable host address.
    pub last_host: Address,
    /// Broadcast address (host bits all one).
    pub broadcast: Address,
}

impl Subnet {
    /// Whether an address falls inside this subnet, by last-octet test.
    ///
    /// An address counts as held when its last octet lies in the usable
    /// host range, or equals the network or broadcast octet.
    pub fn holds(&self, address: Address) -> bool {
        let octet = address.octets()[3];
        (self.first_host.octets()[3]..=self.last_host.octets()[3]).contains(&octet)
            || octet == self.network.octets()[3]
            || octet == self.broadcast.octets()[3]
    }
}

/// The subnet a queried address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Index of the matched subnet.
    pub index: usize,
    /// Network address of the matched subnet.
    pub network: Address,
}
