//! Record file persistence.
//!
//! Provides the flat `id,name,grade` text format used to save and restore a
//! record store.

mod flat_file;

pub use flat_file::FlatFile;
