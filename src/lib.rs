// cargo watch -x 'fmt' -x 'run -- 192.168.1.10 -b 2'

pub mod cli;
pub mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{Address, AddressClass, Membership, Subnet, SubnetPlan};

/// Parse an address string and compute its full subnet plan.
pub fn plan(address: &str, borrowed_bits: u8) -> Result<SubnetPlan, SubnetError> {
    log::info!("#Start plan({address:?}, borrowed_bits={borrowed_bits})");
    let address: Address = address.parse()?;
    processing::build_plan(address, borrowed_bits)
}
