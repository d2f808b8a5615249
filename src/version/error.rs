use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version {input:?}: {reason}")]
    InvalidVersion {
        input: String,
        reason: InvalidReason,
    },

    #[error("Invalid type: expected a version string, found {0}")]
    InvalidType(String),
}

impl VersionError {
    pub(crate) fn invalid(input: &str, reason: InvalidReason) -> Self {
        VersionError::InvalidVersion {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns the grammar violation for `InvalidVersion` errors
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            VersionError::InvalidVersion { reason, .. } => Some(reason),
            VersionError::InvalidType(_) => None,
        }
    }
}

/// Grammar violation found while parsing a version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("empty version string")]
    Empty,

    #[error("missing {0} component")]
    MissingComponent(&'static str),

    #[error("too many numeric components")]
    TooManyComponents,

    #[error("{0} component {1:?} is not a number")]
    NotNumeric(&'static str, String),

    #[error("{0} component {1:?} has a leading zero")]
    LeadingZero(&'static str, String),

    #[error("empty identifier in {0}")]
    EmptyIdentifier(&'static str),

    #[error("identifier {0:?} contains characters outside [0-9A-Za-z-]")]
    InvalidCharacter(String),

    #[error("numeric prerelease identifier {0:?} has a leading zero")]
    PrereleaseLeadingZero(String),

    #[error("'{0}' marker is not followed by any identifier")]
    EmptySegment(char),
}
