//! Locating the subnet an address belongs to.

use crate::models::{Address, Subnet};

/// Find the subnet holding `address`, scanning in ascending index order.
///
/// The last matching subnet wins. Ranges built by
/// [`partition`](crate::processing::partition) are disjoint, so at most one
/// subnet can match; a second match is an internal construction error and
/// trips the debug assertion. Returns `None` when no subnet holds the
/// address, e.g. its last octet lies past the final broadcast of a
/// truncated list.
pub fn find_subnet(address: Address, subnets: &[Subnet]) -> Option<&Subnet> {
    let mut found: Option<&Subnet> = None;
    for sn in subnets {
        if sn.holds(address) {
            debug_assert!(
                found.is_none(),
                "address {address} held by subnets {} and {}",
                found.map(|f| f.index).unwrap_or_default(),
                sn.index
            );
            found = Some(sn);
        }
    }
    found
}
