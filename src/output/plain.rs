//! Plain text output formatting.
//!
//! The record table itself is unstyled so it can be compared byte for byte;
//! status lines use `console` styling.

use crate::store::RecordStore;
use console::style;
use std::io::{self, Write};

/// Print the record table, or the empty notice.
pub fn print_table(store: &RecordStore) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(store.render().as_bytes())?;
    out.flush()
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}
