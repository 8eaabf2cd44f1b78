//! CSV output for a subnet plan.

use crate::models::{Subnet, SubnetPlan};

use super::terminal::format_field;

/// Print the subnet partition as CSV to stdout.
pub fn print_csv(plan: &SubnetPlan) {
    log::info!(
        "#Start print_csv() borrowed_bits={} subnets={}",
        plan.borrowed_bits,
        plan.subnets.len()
    );

    // Header
    println!(r#""idx",       "network",    "first_host",     "last_host",     "broadcast","member""#);

    for sn in &plan.subnets {
        println!("{}", csv_row(sn, is_member(plan, sn)));
    }
}

fn is_member(plan: &SubnetPlan, sn: &Subnet) -> bool {
    plan.membership.map(|m| m.index == sn.index).unwrap_or(false)
}

fn csv_row(sn: &Subnet, member: bool) -> String {
    format!(
        "{idx},{network},{first_host},{last_host},{broadcast},{member}",
        idx = format_field(sn.index, 5),
        network = format_field(sn.network, 16),
        first_host = format_field(sn.first_host, 16),
        last_host = format_field(sn.last_host, 16),
        broadcast = format_field(sn.broadcast, 16),
        member = format_field(if member { "member" } else { "" }, 8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;
    use crate::processing::build_plan;

    #[test]
    fn test_csv_row_marks_the_member() {
        let plan = build_plan(Address::new(192, 168, 1, 10), 2).unwrap();

        let row = csv_row(&plan.subnets[0], true);
        assert_eq!(
            row,
            r#"  "0",   "192.168.1.0",   "192.168.1.1",  "192.168.1.62",  "192.168.1.63","member""#
        );

        let row = csv_row(&plan.subnets[1], false);
        assert!(row.contains(r#""192.168.1.64""#));
        assert!(row.contains(r#""192.168.1.127""#));
        assert!(!row.contains("member"));
    }

    #[test]
    fn test_csv_rows_cover_every_subnet() {
        let plan = build_plan(Address::new(10, 0, 0, 1), 3).unwrap();
        let rows: Vec<String> = plan
            .subnets
            .iter()
            .map(|sn| csv_row(sn, is_member(&plan, sn)))
            .collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows.iter().filter(|r| r.contains("member")).count(), 1);
    }
}
