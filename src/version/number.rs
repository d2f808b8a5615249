//! Arbitrary-precision version components

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::version::identifier::{cmp_numeric, significant_digits};

/// A non-negative decimal number of any width, kept as canonical digits
/// (no leading zeros)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Build from ASCII digits, dropping leading zeros. Callers check the
    /// input is purely digits.
    pub(crate) fn from_digits(digits: &str) -> Self {
        Self(significant_digits(digits).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The value as a `u64`, when it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// This number plus one
    pub fn increment(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return Self(String::from_utf8_lossy(&digits).into_owned());
            }
        }
        // Every digit carried: 99..9 -> 100..0
        digits.insert(0, b'1');
        Self(String::from_utf8_lossy(&digits).into_owned())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_numeric(&self.0, &other.0)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON number when it fits in 64 bits, decimal string otherwise
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_u64() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.serialize_str(&self.0),
        }
    }
}
