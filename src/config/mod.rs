//! Configuration management for Roster.
//!
//! Provides XDG-compliant paths and JSON application settings.

mod settings;

pub use settings::{Paths, Settings};
