//! Subnet calculation logic.
//!
//! This module contains the pure computation over the domain models:
//! - [`partition`] - enumerating the subnets of a block
//! - [`build_plan`] - assembling the complete result
//! - [`find_subnet`] - locating the subnet an address belongs to

mod membership;
mod partition;

// Re-export public functions
pub use membership::find_subnet;
pub use partition::{build_plan, partition};
