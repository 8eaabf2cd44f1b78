//! Environment-driven settings.
//!
//! Read once at startup, after `.env` has been loaded. CLI flags override
//! anything found here.

use crate::cli::OutputFormat;

/// Settings picked up from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Default output format when no `--format` flag is given.
    pub format: OutputFormat,
    /// Disable ANSI colors on output.
    pub no_color: bool,
}

impl Settings {
    /// Read `SUBNET_CALC_FORMAT` and `SUBNET_CALC_NO_COLOR`.
    ///
    /// Unset or unparseable values fall back to the defaults (table, colored).
    pub fn from_env() -> Settings {
        let format = std::env::var("SUBNET_CALC_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(OutputFormat::Table);
        let no_color = std::env::var("SUBNET_CALC_NO_COLOR")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Settings { format, no_color }
    }
}
