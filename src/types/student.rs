//! The student record and its field rules.
//!
//! A `Student` is a plain value: callers build one freely, and the record
//! store decides whether it may be stored. The rules live here so the store,
//! the flat-file loader and the command line all agree on them.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key, positive.
    pub id: i64,
    /// Letters and spaces, starting and ending with a letter.
    pub name: String,
    /// Grade in `[0, 100]`.
    pub grade: f64,
}

impl Student {
    /// Smallest valid student id.
    pub const MIN_ID: i64 = 1;
    /// Lowest valid grade.
    pub const MIN_GRADE: f64 = 0.0;
    /// Highest valid grade.
    pub const MAX_GRADE: f64 = 100.0;

    /// Create a new record. No validation happens until it is stored.
    pub fn new(id: i64, name: impl Into<String>, grade: f64) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }

    /// Check every field, reporting the first rule that fails.
    ///
    /// Fields are checked in the order id, name, grade.
    pub fn validate(&self) -> StoreResult<()> {
        if !is_valid_id(self.id) {
            return Err(StoreError::InvalidId(self.id));
        }
        if !is_valid_name(&self.name) {
            return Err(StoreError::InvalidName(self.name.clone()));
        }
        if !is_valid_grade(self.grade) {
            return Err(StoreError::InvalidGrade(self.grade));
        }
        Ok(())
    }

    /// The grade as written to record files.
    ///
    /// Shortest decimal that parses back to the same `f64`, never in
    /// exponent form and always with a fractional part.
    pub fn persisted_grade(&self) -> String {
        let text = self.grade.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.2})", self.id, self.name, self.grade)
    }
}

/// Ids are positive integers.
#[inline]
pub const fn is_valid_id(id: i64) -> bool {
    id >= Student::MIN_ID
}

/// Names match `[A-Za-z][A-Za-z ]+[A-Za-z]` in full.
pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 3 {
        return false;
    }

    let first = bytes[0];
    let last = bytes[bytes.len() - 1];

    first.is_ascii_alphabetic()
        && last.is_ascii_alphabetic()
        && bytes.iter().all(|&b| b.is_ascii_alphabetic() || b == b' ')
}

/// Grades lie in `[0, 100]`. NaN is rejected.
#[inline]
pub fn is_valid_grade(grade: f64) -> bool {
    (Student::MIN_GRADE..=Student::MAX_GRADE).contains(&grade)
}
