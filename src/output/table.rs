//! Aligned terminal table for a subnet plan.
//!
//! Renders the summary block and the partition table, highlighting the row
//! the queried address belongs to.

use crate::models::{Subnet, SubnetPlan};
use colored::Colorize;

use super::terminal::paint_member_row;

/// Print the plan summary and subnet table to stdout.
pub fn print_table(plan: &SubnetPlan) {
    log::info!("#Start print_table() subnets={}", plan.subnets.len());

    println!("address     : {} (class {})", plan.address, plan.class);
    println!("network     : {}", plan.network);
    println!("broadcast   : {}", plan.broadcast);
    println!(
        "subnet mask : {} ({} borrowed bits)",
        plan.mask, plan.borrowed_bits
    );
    println!("max subnets : {}", plan.max_subnets);
    println!("max hosts   : {}", plan.max_hosts);
    match plan.membership {
        Some(m) => println!("belongs to  : #{} ({})", m.index, m.network),
        None => println!("belongs to  : not found"),
    }
    println!();

    let header = table_row("#", "network", "first host", "last host", "broadcast");
    println!("{}", header.bold());
    for sn in &plan.subnets {
        let member = plan.membership.map(|m| m.index == sn.index).unwrap_or(false);
        println!("{}", paint_member_row(&subnet_row(sn), member));
    }
}

fn table_row(index: &str, network: &str, first: &str, last: &str, broadcast: &str) -> String {
    format!("{index:>4}  {network:<15}  {first:<15}  {last:<15}  {broadcast:<15}")
}

fn subnet_row(sn: &Subnet) -> String {
    table_row(
        &sn.index.to_string(),
        &sn.network.to_string(),
        &sn.first_host.to_string(),
        &sn.last_host.to_string(),
        &sn.broadcast.to_string(),
    )
}
