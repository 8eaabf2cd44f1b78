//! Output formatting for a subnet plan.
//!
//! The presentation side of the crate; the models carry no markup, these
//! functions render them:
//! - [`table`] - aligned terminal table with membership highlight
//! - [`csv`] - CSV rows with quoted fields
//! - [`json`] - the whole plan as JSON

mod csv;
mod json;
mod table;
mod terminal;

pub use csv::print_csv;
pub use json::print_json;
pub use table::print_table;
pub use terminal::{format_field, paint_member_row};
