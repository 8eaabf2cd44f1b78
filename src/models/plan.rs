//! The complete calculation result.

use super::{Address, AddressClass, Membership, Subnet};
use serde::Serialize;

/// Everything derived from one (address, borrowed bits) pair.
///
/// Plain data for the presentation layer to format; carries no rendering
/// markup. Recomputed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetPlan {
    /// The queried address, as parsed.
    pub address: Address,
    /// Classful label of the queried address.
    pub class: AddressClass,
    /// Network address of the undivided block.
    pub network: Address,
    /// Broadcast address of the undivided block.
    pub broadcast: Address,
    /// Subnet mask for the borrowed bits.
    pub mask: Address,
    /// Host bits borrowed for subnetting.
    pub borrowed_bits: u8,
    /// Number of subnets in the partition.
    pub max_subnets: u32,
    /// Usable hosts per subnet.
    pub max_hosts: u32,
    /// The full partition, ordered by ascending index.
    pub subnets: Vec<Subnet>,
    /// Which subnet the queried address falls in.
    pub membership: Option<Membership>,
}
