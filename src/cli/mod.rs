//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture over one record file:
//! - `roster add <id> <name> <grade>` - Add a student
//! - `roster delete <id>` - Remove a student
//! - `roster rename|set-id|set-grade` - Update one field
//! - `roster show <id>` / `roster list` - Display records

mod edit;
mod list;

pub use edit::{AddCommand, DeleteCommand, RenameCommand, SetGradeCommand, SetIdCommand};
pub use list::{ListCommand, ShowCommand};

use crate::config::{Paths, Settings};
use crate::error::{CliError, CliResult, StoreError};
use crate::output;
use crate::storage::FlatFile;
use crate::store::RecordStore;
use crate::types::FileName;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Roster - a validated student record store.
///
/// Every command loads the record file, applies one change, and writes the
/// file back.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage student records in a flat file", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding record files
    #[arg(long, global = true, value_name = "DIR", env = "ROSTER_DIR")]
    pub dir: Option<PathBuf>,

    /// Record file base name (letters, digits, '-' and '_')
    #[arg(short, long, global = true, value_name = "NAME")]
    pub file: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student record
    #[command(alias = "a")]
    Add(AddCommand),

    /// Delete a student record
    #[command(alias = "rm")]
    Delete(DeleteCommand),

    /// Change a student's name
    Rename(RenameCommand),

    /// Move a student to a new id
    SetId(SetIdCommand),

    /// Change a student's grade
    SetGrade(SetGradeCommand),

    /// Show a single student
    Show(ShowCommand),

    /// List all students
    #[command(alias = "ls")]
    List(ListCommand),
}

impl Commands {
    /// Execute the selected subcommand.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Rename(cmd) => cmd.execute(ctx),
            Self::SetId(cmd) => cmd.execute(ctx),
            Self::SetGrade(cmd) => cmd.execute(ctx),
            Self::Show(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
        }
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered fixed-width table
    Table,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Everything a command needs to find and rewrite the record file.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory of record files.
    pub files: FlatFile,
    /// Base name of the record file.
    pub file_name: String,
    /// Listing format when a command does not pick one.
    pub default_format: OutputFormat,
    /// Suppress status lines.
    pub quiet: bool,
}

impl Context {
    /// Build the context from arguments, falling back to settings.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let paths = Paths::resolve()?;
        let settings = match &cli.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load(&paths)?,
        };

        let default_format = OutputFormat::from_str(&settings.default_format, true)
            .map_err(|e| CliError::Other(format!("invalid default_format: {}", e)))?;
        let dir = cli
            .dir
            .clone()
            .unwrap_or_else(|| settings.data_dir(&paths));
        let file_name = cli
            .file
            .clone()
            .unwrap_or_else(|| settings.default_file.clone());

        debug!(dir = %dir.display(), file = %file_name, "resolved record file");

        Ok(Self {
            files: FlatFile::new(dir),
            file_name,
            default_format,
            quiet: cli.quiet,
        })
    }

    /// Load the record file. A file that does not exist yet is an empty store.
    pub fn open_store(&self) -> CliResult<RecordStore> {
        let mut store = RecordStore::new();
        match store.load_from(&self.files, &self.file_name) {
            Ok(()) => Ok(store),
            Err(StoreError::MissingFile(path)) => {
                debug!(path = %path.display(), "no record file yet, starting empty");
                Ok(store)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the store back to the record file.
    ///
    /// An empty store cannot be saved, so the file is removed instead.
    pub fn commit(&self, store: &RecordStore) -> CliResult<()> {
        if store.is_empty() {
            let name: FileName = self.file_name.parse()?;
            let path = self.files.path_for(&name);
            if path.exists() {
                fs::remove_file(&path)?;
            }
            if !self.quiet {
                output::print_warning(&format!(
                    "no records left, removed {}",
                    path.display()
                ));
            }
            return Ok(());
        }

        store.save_to(&self.files, &self.file_name)?;
        Ok(())
    }

    /// Print a success line unless quiet.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            output::print_success(msg);
        }
    }
}
