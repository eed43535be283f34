//! Flat text record files.
//!
//! One student per line, fields joined by commas in the order
//! `id,name,grade`, each line terminated by `\n`. Names can never contain a
//! comma or a quote, so fields are never quoted.

use crate::error::{StoreError, StoreResult};
use crate::types::{FileName, Student};
use std::fs;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;

/// Number of fields on every record line.
const FIELDS_PER_RECORD: usize = 3;

/// Record files rooted in a single directory.
#[derive(Debug, Clone)]
pub struct FlatFile {
    dir: PathBuf,
}

impl FlatFile {
    /// Record files stored under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Record files stored in the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Full path of the record file for `name`.
    pub fn path_for(&self, name: &FileName) -> PathBuf {
        self.dir.join(name.with_extension())
    }

    /// Write `students` to the record file for `name`, replacing it.
    ///
    /// Records go to a temporary file in the same directory which is renamed
    /// over the target once complete, so a failed write leaves any previous
    /// file untouched.
    pub fn write<'a, I>(&self, name: &FileName, students: I) -> StoreResult<PathBuf>
    where
        I: IntoIterator<Item = &'a Student>,
    {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;

        let mut written = 0usize;
        {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(tmp.as_file_mut());

            for student in students {
                wtr.write_record([
                    student.id.to_string(),
                    student.name.clone(),
                    student.persisted_grade(),
                ])?;
                written += 1;
            }
            wtr.flush()?;
        }

        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        debug!(path = %path.display(), records = written, "wrote record file");
        Ok(path)
    }

    /// Parse every line of the record file for `name`.
    ///
    /// Only the line structure is checked here; field rules are enforced by
    /// the store when the records are inserted. Blank lines and padded
    /// numbers are malformed.
    pub fn read(&self, name: &FileName) -> StoreResult<Vec<Student>> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(StoreError::MissingFile(path));
        }

        let content = fs::read_to_string(&path)?;

        // The csv reader skips empty lines, so they are rejected up front.
        if let Some(index) = content.lines().position(str::is_empty) {
            return Err(StoreError::MalformedRecord {
                line: index + 1,
                reason: "blank line".to_string(),
            });
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut students = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            let line = index + 1;

            if record.len() != FIELDS_PER_RECORD {
                return Err(StoreError::MalformedRecord {
                    line,
                    reason: format!(
                        "expected {} fields, found {}",
                        FIELDS_PER_RECORD,
                        record.len()
                    ),
                });
            }

            let id: i64 = record[0].parse().map_err(|_| StoreError::MalformedRecord {
                line,
                reason: format!("invalid id {:?}", &record[0]),
            })?;
            let grade: f64 = record[2].parse().map_err(|_| StoreError::MalformedRecord {
                line,
                reason: format!("invalid grade {:?}", &record[2]),
            })?;

            students.push(Student::new(id, &record[1], grade));
        }

        debug!(path = %path.display(), records = students.len(), "read record file");
        Ok(students)
    }
}
