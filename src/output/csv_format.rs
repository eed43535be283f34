//! CSV output formatting.

use crate::types::Student;
use std::io::{self, Write};

/// Write records as CSV with an `id,name,grade` header.
pub fn write_csv<W: Write>(out: W, students: &[Student]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["id", "name", "grade"])?;
    for student in students {
        wtr.write_record([
            student.id.to_string(),
            student.name.clone(),
            format!("{:.2}", student.grade),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print records in CSV format.
pub fn print_csv(students: &[Student]) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), students)
}
