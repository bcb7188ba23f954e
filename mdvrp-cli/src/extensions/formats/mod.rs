//! Contains logic to read snapshots and write routing tables.

mod reader;
pub use self::reader::read_csv_snapshot;

mod writer;
pub use self::writer::*;

use std::str::FromStr;

/// Specifies an output format of the leg table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated values with a header row.
    Csv,
    /// A json array of leg objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: '{value}'")),
        }
    }
}
