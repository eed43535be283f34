//! Output formatting module.
//!
//! Provides table, JSON, and CSV listings of student records, plus styled
//! status lines.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, write_csv};
pub use json_format::{print_json, write_json};
pub use plain::{print_error, print_success, print_table, print_warning};

use crate::cli::OutputFormat;
use crate::store::RecordStore;
use std::io;

/// Format and print every record according to the specified format.
pub fn format_records(store: &RecordStore, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => plain::print_table(store),
        OutputFormat::Json => json_format::print_json(&store.students()),
        OutputFormat::Csv => csv_format::print_csv(&store.students()),
    }
}
