//! JSON output formatting.

use crate::types::Student;
use std::io::{self, Write};

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, students)?;
    writeln!(out)
}

/// Print records in JSON format.
pub fn print_json(students: &[Student]) -> io::Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), students)
}
