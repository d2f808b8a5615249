//! Lenient coercion of near-miss version strings
//!
//! Turns strings such as "0.1", "01.2.3", "1.2.3.4" or "1.2.3 (beta)" into
//! valid versions:
//! - numeric components lose leading zeros, and are padded with `.0` in full mode
//! - characters outside `[0-9A-Za-z+.-]` become `-`
//! - a trailing `+...` or `.` section becomes build metadata
//! - anything else after the numbers becomes the prerelease

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::version::error::{InvalidReason, VersionError};
use crate::version::number::Number;
use crate::version::semver::{ParseMode, Version};

static BASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+(?:\.[0-9]+)?)?").expect("valid regex"));

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9+.-]").expect("valid regex"));

impl Version {
    /// Coerce an arbitrary string into a version, parsed in the given mode
    ///
    /// Examples:
    /// - "0.1" -> "0.1.0" (full) or "0.1" (partial)
    /// - "1.2.3.4.5" -> "1.2.3+4.5"
    /// - "1.2.3-rc1+build+5" -> "1.2.3-rc1+build.5"
    /// - "1.2.3 beta" -> "1.2.3-beta"
    pub fn coerce(input: &str, mode: ParseMode) -> Result<Self, VersionError> {
        let coerced = coerce_text(input, mode)?;
        if coerced != input {
            trace!("Coerced {:?} into {:?}", input, coerced);
        }
        Self::parse(&coerced, mode)
    }
}

fn coerce_text(input: &str, mode: ParseMode) -> Result<String, VersionError> {
    let Some(base) = BASE_RE.find(input) else {
        return Err(VersionError::invalid(
            input,
            InvalidReason::NotNumeric("major", input.to_string()),
        ));
    };

    let mut numbers: Vec<String> = base
        .as_str()
        .split('.')
        .map(|part| Number::from_digits(part).to_string())
        .collect();

    if mode == ParseMode::Full {
        numbers.resize(3, "0".to_string());
    }
    let mut version = numbers.join(".");

    let rest = &input[base.end()..];
    if rest.is_empty() {
        return Ok(version);
    }
    let rest: &str = &INVALID_CHARS_RE.replace_all(rest, "-");

    let (prerelease, build) = if let Some(build) = rest.strip_prefix(['+', '.']) {
        ("", build)
    } else {
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        rest.split_once('+').unwrap_or((rest, ""))
    };

    if !prerelease.is_empty() {
        version.push('-');
        version.push_str(prerelease);
    }
    if !build.is_empty() {
        version.push('+');
        version.push_str(&build.replace('+', "."));
    }
    Ok(version)
}
