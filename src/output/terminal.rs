//! Terminal output utilities.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Paint a table row when it holds the queried address.
///
/// Replaces the row highlight a graphical table would use; colors are a
/// no-op when the color override is off.
pub fn paint_member_row(row: &str, member: bool) -> String {
    if member {
        row.on_blue().to_string()
    } else {
        row.to_string()
    }
}
