//! Semantic Versioning parsing, rendering and precedence ordering

pub mod config;
pub mod version;

pub use version::{Number, ParseMode, Version, VersionError};
