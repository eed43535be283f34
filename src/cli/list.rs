//! Subcommands that display records without changing them.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::output;
use crate::store::RecordStore;
use clap::Parser;

/// List all students.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let store = ctx.open_store()?;
        output::format_records(&store, self.format.unwrap_or(ctx.default_format))?;
        Ok(())
    }
}

/// Show a single student.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Student id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let student = ctx.open_store()?.get(self.id)?;
        let single = RecordStore::from_students([student])?;
        output::format_records(&single, self.format.unwrap_or(ctx.default_format))?;
        Ok(())
    }
}
