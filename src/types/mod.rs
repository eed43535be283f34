//! Core record types with validation.
//!
//! `Student` carries raw caller input and knows how to check it; `FileName`
//! only exists once its text has been validated.

mod file_name;
mod student;

pub use file_name::{FileName, FileNameError};
pub use student::{is_valid_grade, is_valid_id, is_valid_name, Student};
