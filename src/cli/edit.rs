//! Subcommands that change the record file.
//!
//! Each one loads the file, applies a single store operation, and writes the
//! file back. Validation is left entirely to the store.

use super::Context;
use crate::error::CliResult;
use crate::types::Student;
use clap::Parser;

/// Add a student record.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Student id (positive integer)
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// Student name (letters and spaces)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Grade between 0 and 100
    #[arg(value_name = "GRADE", allow_negative_numbers = true)]
    pub grade: f64,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut store = ctx.open_store()?;
        let student = Student::new(self.id, self.name.as_str(), self.grade);

        store.add(&student)?;
        ctx.commit(&store)?;

        ctx.success(&format!("Added {}", student));
        Ok(())
    }
}

/// Delete a student record.
///
/// With `--name` and `--grade` the record is only removed if every field
/// matches.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Student id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// Expected name of the record
    #[arg(long, requires = "grade")]
    pub name: Option<String>,

    /// Expected grade of the record
    #[arg(long, requires = "name")]
    pub grade: Option<f64>,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut store = ctx.open_store()?;

        match (&self.name, self.grade) {
            (Some(name), Some(grade)) => {
                store.delete_record(&Student::new(self.id, name.as_str(), grade))?;
            }
            _ => {
                store.delete(self.id)?;
            }
        }
        ctx.commit(&store)?;

        ctx.success(&format!("Deleted student {}", self.id));
        Ok(())
    }
}

/// Change a student's name.
#[derive(Parser, Debug)]
pub struct RenameCommand {
    /// Student id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// New name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut store = ctx.open_store()?;
        store.update_name(self.id, &self.name)?;
        ctx.commit(&store)?;

        ctx.success(&format!("Renamed student {} to {}", self.id, self.name));
        Ok(())
    }
}

/// Move a student to a new id.
#[derive(Parser, Debug)]
pub struct SetIdCommand {
    /// Current student id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// New student id
    #[arg(value_name = "NEW_ID", allow_negative_numbers = true)]
    pub new_id: i64,
}

impl SetIdCommand {
    /// Execute the set-id command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut store = ctx.open_store()?;
        store.update_id(self.id, self.new_id)?;
        ctx.commit(&store)?;

        ctx.success(&format!("Moved student {} to id {}", self.id, self.new_id));
        Ok(())
    }
}

/// Change a student's grade.
#[derive(Parser, Debug)]
pub struct SetGradeCommand {
    /// Student id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// New grade between 0 and 100
    #[arg(value_name = "GRADE", allow_negative_numbers = true)]
    pub grade: f64,
}

impl SetGradeCommand {
    /// Execute the set-grade command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut store = ctx.open_store()?;
        store.update_grade(self.id, self.grade)?;
        ctx.commit(&store)?;

        ctx.success(&format!("Set grade of student {} to {:.2}", self.id, self.grade));
        Ok(())
    }
}
