//! Command line interface.

use clap::{Parser, ValueEnum};
use std::str::FromStr;

/// Class C IPv4 subnet partition calculator.
///
/// Splits the block of ADDRESS into subnets for the given number of
/// borrowed host bits and reports which subnet ADDRESS belongs to.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IPv4 address to partition, e.g. 192.168.1.10
    pub address: String,

    /// Host bits borrowed for subnetting (0-6)
    #[arg(short, long, default_value_t = 0)]
    pub borrowed_bits: u8,

    /// Output format (defaults to SUBNET_CALC_FORMAT, then table)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// How to render the plan on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}
