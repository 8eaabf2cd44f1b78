//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Address`] - four-octet IPv4 address with dotted-quad parsing
//! - [`Subnet`] and [`Membership`] - one row of the partition and a match
//! - [`SubnetPlan`] - the complete calculation result

mod address;
mod plan;
mod subnet;

// Re-export public types
pub use address::{
    max_hosts, max_subnets, subnet_mask, Address, AddressClass, HOST_BITS, MAX_BORROWED_BITS,
};
pub use plan::SubnetPlan;
pub use subnet::{Membership, Subnet};
