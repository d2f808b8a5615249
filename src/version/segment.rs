//! Tri-state prerelease/build segment

use std::fmt;

use crate::version::identifier::Identifier;

/// A prerelease or build segment of a version
///
/// Full parsing always knows whether the `-`/`+` section exists, so it only
/// yields `Empty` or `Present`. Partial parsing may also yield `Omitted`
/// when the segment was never specified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Not specified at all (partial versions only)
    #[default]
    Omitted,
    /// Specified as having no identifiers
    Empty,
    /// One or more identifiers
    Present(Vec<Identifier>),
}

impl Segment {
    /// Build a segment from identifiers, collapsing an empty list to `Empty`
    pub fn from_identifiers(identifiers: Vec<Identifier>) -> Self {
        if identifiers.is_empty() {
            Segment::Empty
        } else {
            Segment::Present(identifiers)
        }
    }

    /// Identifiers in this segment; empty for `Omitted` and `Empty`
    pub fn identifiers(&self) -> &[Identifier] {
        match self {
            Segment::Present(ids) => ids,
            Segment::Omitted | Segment::Empty => &[],
        }
    }

    /// `None` when omitted, otherwise the (possibly empty) identifier list
    pub fn as_option(&self) -> Option<&[Identifier]> {
        match self {
            Segment::Omitted => None,
            _ => Some(self.identifiers()),
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, Segment::Omitted)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Segment::Present(_))
    }

    /// Raw identifier strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.identifiers().iter().map(|id| id.to_string()).collect()
    }

    /// Exact representation equality, unlike `==` which compares numeric
    /// identifiers by value
    pub(crate) fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Segment::Omitted, Segment::Omitted) | (Segment::Empty, Segment::Empty) => true,
            (Segment::Present(a), Segment::Present(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_str() == y.as_str())
            }
            _ => false,
        }
    }
}

/// Renders the dot-joined identifiers, without the leading marker
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.identifiers().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(id.as_str())?;
        }
        Ok(())
    }
}
