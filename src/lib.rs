//! # Roster - A Validated Student Record Store
//!
//! Roster keeps student records (id, name, grade) in memory, enforces the
//! rules every stored record must satisfy, renders them as a fixed-width
//! table, and persists them to a flat `id,name,grade` text file.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use roster::{RecordStore, Student};
//!
//! fn main() -> roster::StoreResult<()> {
//!     let mut store = RecordStore::new();
//!     store.add(&Student::new(10154707, "Jason", 82.0))?;
//!     store.update_grade(10154707, 85.5)?;
//!
//!     print!("{}", store.render());
//!     store.save("students")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - The `Student` record and validated file names
//! - [`store`] - The keyed record store and table renderer
//! - [`storage`] - Flat-file persistence
//! - [`config`] - Paths and application settings
//! - [`output`] - Table, JSON, and CSV printers
//! - [`cli`] - Command-line argument model and handlers
//! - [`error`] - Error types for each layer

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, StoreError, StoreResult};
pub use storage::FlatFile;
pub use store::RecordStore;
pub use types::{FileName, Student};
