//! JSON output for a subnet plan.

use crate::models::SubnetPlan;
use std::error::Error;

/// Print the whole plan as pretty JSON to stdout.
pub fn print_json(plan: &SubnetPlan) -> Result<(), Box<dyn Error>> {
    let rendered = serde_json::to_string_pretty(plan)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::Address;
    use crate::processing::build_plan;

    #[test]
    fn test_plan_serializes_with_dotted_addresses() {
        let plan = build_plan(Address::new(192, 168, 1, 10), 2).unwrap();
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["address"], "192.168.1.10");
        assert_eq!(value["class"], "C");
        assert_eq!(value["mask"], "255.255.255.192");
        assert_eq!(value["max_subnets"], 4);
        assert_eq!(value["max_hosts"], 62);
        assert_eq!(value["subnets"].as_array().unwrap().len(), 4);
        assert_eq!(value["subnets"][1]["network"], "192.168.1.64");
        assert_eq!(value["membership"]["index"], 0);
    }
}
