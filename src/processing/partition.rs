//! Subnet enumeration over the last octet.
//!
//! Splits a Class C block into equal subnets and assembles the complete
//! calculation result.

use crate::error::SubnetError;
use crate::models::{self, Address, Membership, Subnet, SubnetPlan};
use crate::processing::find_subnet;

/// Enumerate the subnets of a block.
///
/// Subnet `i` starts at last octet `i * (max_hosts + 2)`; the first and
/// last usable hosts sit one above the network and one below the broadcast.
/// The first three octets of `base` are carried unchanged. Pure function of
/// its inputs, callable repeatedly with identical results.
pub fn partition(base: Address, max_subnets: u32, max_hosts: u32) -> Vec<Subnet> {
    let stride = max_hosts + 2;
    let mut subnets = Vec::with_capacity(max_subnets as usize);
    for index in 0..max_subnets {
        let network = index * stride;
        let broadcast = network + max_hosts + 1;
        assert!(
            broadcast <= 255,
            "subnet {index} broadcast octet {broadcast} > 255 should never happen."
        );
        subnets.push(Subnet {
            index: index as usize,
            network: base.with_last_octet(network as u8),
            first_host: base.with_last_octet((network + 1) as u8),
            last_host: base.with_last_octet((network + max_hosts) as u8),
            broadcast: base.with_last_octet(broadcast as u8),
        });
    }
    subnets
}

/// Compute the full [`SubnetPlan`] for an address and borrowed bits.
///
/// Fails fast with a typed error when `borrowed_bits` is out of domain;
/// no partial result is produced.
pub fn build_plan(address: Address, borrowed_bits: u8) -> Result<SubnetPlan, SubnetError> {
    let mask = models::subnet_mask(borrowed_bits)?;
    let max_subnets = models::max_subnets(borrowed_bits)?;
    let max_hosts = models::max_hosts(borrowed_bits)?;

    let base = address.network_address();
    let subnets = partition(base, max_subnets, max_hosts);
    log::info!("# Got subnet count = {} == {}", max_subnets, subnets.len());

    let membership = find_subnet(address, &subnets).map(|sn| Membership {
        index: sn.index,
        network: sn.network,
    });

    Ok(SubnetPlan {
        address,
        class: address.class(),
        network: base,
        broadcast: address.broadcast_address(),
        mask,
        borrowed_bits,
        max_subnets,
        max_hosts,
        subnets,
        membership,
    })
}
