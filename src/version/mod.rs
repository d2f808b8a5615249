//! Semantic Versioning values and precedence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Version   │────▶│   Segment   │────▶│ Identifier  │
//! │(parse, ord) │     │ (tri-state) │     │ (precedence)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Coerce    │     │   Upgrade   │
//! │  (lenient)  │     │(newest pick)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`identifier`]: identifier and identifier-list precedence
//! - [`number`]: arbitrary-precision major/minor/patch components
//! - [`segment`]: omitted / empty / present prerelease and build segments
//! - [`semver`]: the `Version` value: parsing, rendering, ordering
//! - [`coerce`]: lenient coercion of near-miss version strings
//! - [`serialize`]: serde support
//! - [`upgrade`]: picking newer releases out of version lists
//! - [`error`]: error types for parsing

pub mod coerce;
pub mod error;
pub mod identifier;
pub mod number;
pub mod segment;
pub mod semver;
pub mod serialize;
pub mod upgrade;

pub use error::{InvalidReason, VersionError};
pub use identifier::{Identifier, identifier_cmp, identifier_list_cmp};
pub use number::Number;
pub use segment::Segment;
pub use self::semver::{ParseMode, Version, compare, validate};
