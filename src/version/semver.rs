use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::version::error::{InvalidReason, VersionError};
use crate::version::identifier::Identifier;
use crate::version::number::Number;
use crate::version::segment::Segment;

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// How strictly a version string is parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, all three numbers required
    #[default]
    Full,
    /// Trailing components may be left out entirely ("1", "1.2")
    Partial,
}

/// A semantic version
///
/// Ordering and equality follow Semantic Versioning precedence: build
/// metadata is ignored, and a prerelease sorts below its normal version.
/// Use [`Version::identical`] for exact representation equality.
///
/// Numeric components have no width limit. Omitted minor/patch components
/// (partial versions) sort below any present value.
#[derive(Debug, Clone)]
pub struct Version {
    major: Number,
    minor: Option<Number>,
    patch: Option<Number>,
    prerelease: Segment,
    build: Segment,
}

impl Version {
    /// Create a full version with no prerelease and no build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_numbers(major.into(), minor.into(), patch.into())
    }

    fn from_numbers(major: Number, minor: Number, patch: Number) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
            prerelease: Segment::Empty,
            build: Segment::Empty,
        }
    }

    /// Parse a version string in the given mode
    pub fn parse(input: &str, mode: ParseMode) -> Result<Self, VersionError> {
        parse_version(input, mode)
            .inspect_err(|e| debug!("Rejected version {:?} ({:?} mode): {}", input, mode, e))
    }

    /// Parse a version string that may omit trailing components
    pub fn parse_partial(input: &str) -> Result<Self, VersionError> {
        Self::parse(input, ParseMode::Partial)
    }

    /// Replace the prerelease identifiers, validating each one
    pub fn with_prerelease<I, S>(mut self, identifiers: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prerelease = build_segment(identifiers, Section::Prerelease)?;
        Ok(self)
    }

    /// Replace the build metadata identifiers, validating each one
    pub fn with_build<I, S>(mut self, identifiers: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build = build_segment(identifiers, Section::Build)?;
        Ok(self)
    }

    pub fn major(&self) -> &Number {
        &self.major
    }

    pub fn minor(&self) -> Option<&Number> {
        self.minor.as_ref()
    }

    pub fn patch(&self) -> Option<&Number> {
        self.patch.as_ref()
    }

    pub fn prerelease(&self) -> &Segment {
        &self.prerelease
    }

    pub fn build(&self) -> &Segment {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_present()
    }

    /// Field-for-field identity, including build metadata and whether a
    /// segment was omitted or specified empty
    pub fn identical(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease.identical(&other.prerelease)
            && self.build.identical(&other.build)
    }

    /// Fill omitted components with zero and omitted segments with empty ones
    ///
    /// Examples:
    /// - "1" -> "1.0.0"
    /// - "1.2-rc.1" -> "1.2.0-rc.1"
    pub fn completed(&self) -> Self {
        let zero = || Number::from(0);
        Self {
            major: self.major.clone(),
            minor: Some(self.minor.clone().unwrap_or_else(zero)),
            patch: Some(self.patch.clone().unwrap_or_else(zero)),
            prerelease: complete_segment(&self.prerelease),
            build: complete_segment(&self.build),
        }
    }

    /// The next major release: "1.2.3" -> "2.0.0", "2.0.0-rc.1" -> "2.0.0"
    pub fn next_major(&self) -> Self {
        let (major, minor, patch) = self.completed_numbers();
        let zero = || Number::from(0);
        if self.is_prerelease() && minor.is_zero() && patch.is_zero() {
            return Self::from_numbers(major, zero(), zero());
        }
        Self::from_numbers(major.increment(), zero(), zero())
    }

    /// The next minor release: "1.2.3" -> "1.3.0", "1.3.0-rc.1" -> "1.3.0"
    pub fn next_minor(&self) -> Self {
        let (major, minor, patch) = self.completed_numbers();
        if self.is_prerelease() && patch.is_zero() {
            return Self::from_numbers(major, minor, patch);
        }
        Self::from_numbers(major, minor.increment(), Number::from(0))
    }

    /// The next patch release: "1.2.3" -> "1.2.4", "1.2.4-rc.1" -> "1.2.4"
    pub fn next_patch(&self) -> Self {
        let (major, minor, patch) = self.completed_numbers();
        if self.is_prerelease() {
            return Self::from_numbers(major, minor, patch);
        }
        Self::from_numbers(major, minor, patch.increment())
    }

    fn completed_numbers(&self) -> (Number, Number, Number) {
        let completed = self.completed();
        let zero = || Number::from(0);
        (
            completed.major,
            completed.minor.unwrap_or_else(zero),
            completed.patch.unwrap_or_else(zero),
        )
    }
}

/// Compare two full version strings by precedence
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(a.parse::<Version>()?.cmp(&b.parse::<Version>()?))
}

/// Whether the string is a valid full version
pub fn validate(input: &str) -> bool {
    parse_version(input, ParseMode::Full).is_ok()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ParseMode::Full)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = &self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = &self.patch {
            write!(f, ".{patch}")?;
        }
        if self.prerelease.is_present() {
            write!(f, "-{}", self.prerelease)?;
        }
        if self.build.is_present() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| {
                cmp_prerelease(
                    self.prerelease.identifiers(),
                    other.prerelease.identifiers(),
                )
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.identifiers().hash(state);
    }
}

/// A version without prerelease identifiers outranks one with them
fn cmp_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

#[derive(Debug, Clone, Copy)]
enum Section {
    Prerelease,
    Build,
}

impl Section {
    fn name(self) -> &'static str {
        match self {
            Section::Prerelease => "prerelease",
            Section::Build => "build",
        }
    }

    fn marker(self) -> char {
        match self {
            Section::Prerelease => '-',
            Section::Build => '+',
        }
    }
}

fn parse_version(input: &str, mode: ParseMode) -> Result<Version, VersionError> {
    let invalid = |reason| VersionError::invalid(input, reason);

    if input.is_empty() {
        return Err(invalid(InvalidReason::Empty));
    }

    // The numeric core never contains '-' or '+', so the first of each is a marker
    let (rest, build) = match input.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (input, None),
    };
    let (core, prerelease) = match rest.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (rest, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() > COMPONENT_NAMES.len() {
        return Err(invalid(InvalidReason::TooManyComponents));
    }
    if mode == ParseMode::Full && parts.len() < COMPONENT_NAMES.len() {
        return Err(invalid(InvalidReason::MissingComponent(
            COMPONENT_NAMES[parts.len()],
        )));
    }

    let numbers = parts
        .iter()
        .zip(COMPONENT_NAMES)
        .map(|(part, name)| parse_numeric(name, part))
        .collect::<Result<Vec<Number>, _>>()
        .map_err(invalid)?;

    let prerelease = match prerelease {
        Some(text) => {
            Segment::Present(parse_identifiers(text, Section::Prerelease).map_err(invalid)?)
        }
        None if mode == ParseMode::Partial && build.is_none() => Segment::Omitted,
        None => Segment::Empty,
    };
    let build = match build {
        Some(text) => Segment::Present(parse_identifiers(text, Section::Build).map_err(invalid)?),
        None if mode == ParseMode::Partial => Segment::Omitted,
        None => Segment::Empty,
    };

    let mut numbers = numbers.into_iter();
    Ok(Version {
        major: numbers
            .next()
            .ok_or_else(|| invalid(InvalidReason::MissingComponent("major")))?,
        minor: numbers.next(),
        patch: numbers.next(),
        prerelease,
        build,
    })
}

fn parse_numeric(name: &'static str, part: &str) -> Result<Number, InvalidReason> {
    if part.is_empty() {
        return Err(InvalidReason::MissingComponent(name));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidReason::NotNumeric(name, part.to_string()));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(InvalidReason::LeadingZero(name, part.to_string()));
    }
    Ok(Number::from_digits(part))
}

fn parse_identifiers(text: &str, section: Section) -> Result<Vec<Identifier>, InvalidReason> {
    if text.is_empty() {
        return Err(InvalidReason::EmptySegment(section.marker()));
    }
    text.split('.')
        .map(|part| parse_identifier(part, section))
        .collect()
}

fn parse_identifier(part: &str, section: Section) -> Result<Identifier, InvalidReason> {
    if part.is_empty() {
        return Err(InvalidReason::EmptyIdentifier(section.name()));
    }
    if !part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(InvalidReason::InvalidCharacter(part.to_string()));
    }

    let identifier = Identifier::new(part);
    // Build metadata may carry leading zeros ("2012-04-13", "007")
    if matches!(section, Section::Prerelease)
        && identifier.is_numeric()
        && part.len() > 1
        && part.starts_with('0')
    {
        return Err(InvalidReason::PrereleaseLeadingZero(part.to_string()));
    }
    Ok(identifier)
}

fn build_segment<I, S>(identifiers: I, section: Section) -> Result<Segment, VersionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let identifiers = identifiers
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            parse_identifier(id, section).map_err(|reason| VersionError::invalid(id, reason))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Segment::from_identifiers(identifiers))
}

fn complete_segment(segment: &Segment) -> Segment {
    match segment {
        Segment::Omitted => Segment::Empty,
        other => other.clone(),
    }
}
