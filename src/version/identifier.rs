//! Identifier precedence
//!
//! Prerelease and build segments are dot-separated identifiers. Precedence
//! between two identifiers follows Semantic Versioning:
//! - both purely numeric: compared by numeric value (no width limit)
//! - exactly one numeric: the numeric one is lower
//! - neither numeric: compared lexically in ASCII order

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single prerelease or build identifier, classified once at construction
#[derive(Debug, Clone)]
pub enum Identifier {
    /// Purely decimal digits (e.g., "1" in "alpha.1")
    Numeric(String),
    /// Anything else (e.g., "alpha", "rc4", "3-14-15")
    Text(String),
}

impl Identifier {
    /// Classify an identifier. Grammar validation happens in the parser.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if is_numeric(&value) {
            Identifier::Numeric(value)
        } else {
            Identifier::Text(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Numeric(s) | Identifier::Text(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => cmp_numeric(a, b),
            (Identifier::Numeric(_), Identifier::Text(_)) => Ordering::Less,
            (Identifier::Text(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Text(a), Identifier::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Numeric identifiers are equal by value, so hash the significant digits
        match self {
            Identifier::Numeric(s) => {
                0u8.hash(state);
                significant_digits(s).hash(state);
            }
            Identifier::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

/// Compare two identifiers by Semantic Versioning precedence
///
/// Examples:
/// - `identifier_cmp("11", "2")` -> Greater
/// - `identifier_cmp("10", "1a")` -> Less
/// - `identifier_cmp("ab", "aa")` -> Greater
pub fn identifier_cmp(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => cmp_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Compare two identifier lists element by element
///
/// The first differing element decides. When one list is a prefix of the
/// other, the shorter list is lower ("alpha" < "alpha.1").
pub fn identifier_list_cmp<A, B>(a: &[A], b: &[B]) -> Ordering
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    for (x, y) in a.iter().zip(b) {
        match identifier_cmp(x.as_ref(), y.as_ref()) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn significant_digits(s: &str) -> &str {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

/// Arbitrary-precision comparison of two decimal digit strings
pub(crate) fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = significant_digits(a);
    let b = significant_digits(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(id: &Identifier) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    // Integers
    #[case("1", "1", Ordering::Equal)]
    #[case("1", "2", Ordering::Less)]
    #[case("11", "2", Ordering::Greater)]
    #[case("3333", "40", Ordering::Greater)]
    // Text
    #[case("aa", "ab", Ordering::Less)]
    #[case("aa", "aa", Ordering::Equal)]
    #[case("ab", "aa", Ordering::Greater)]
    #[case("aaa", "ab", Ordering::Less)]
    #[case("B", "a", Ordering::Less)] // ASCII: uppercase before lowercase
    // Mixed
    #[case("10", "1a", Ordering::Less)]
    #[case("1a", "10", Ordering::Greater)]
    #[case("ab1", "42", Ordering::Greater)]
    #[case("-", "0", Ordering::Greater)]
    fn identifier_cmp_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(identifier_cmp(a, b), expected);
        assert_eq!(Identifier::new(a).cmp(&Identifier::new(b)), expected);
    }

    #[rstest]
    #[case(
        "12345678901234567890123456789012345678901234567890",
        "12345678901234567890123456789012345678901234567891",
        Ordering::Less
    )]
    #[case(
        "99999999999999999999999999999999999999999999999999",
        "100000000000000000000000000000000000000000000000000",
        Ordering::Less
    )]
    #[case("18446744073709551616", "18446744073709551615", Ordering::Greater)]
    #[case("007", "7", Ordering::Equal)]
    #[case("0", "000", Ordering::Equal)]
    fn identifier_cmp_compares_numerals_without_width_limit(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(identifier_cmp(a, b), expected);
        assert_eq!(identifier_cmp(b, a), expected.reverse());
    }

    #[test]
    fn identifier_cmp_matches_integer_sign_for_small_numbers() {
        for a in 0u32..40 {
            for b in 0u32..40 {
                assert_eq!(
                    identifier_cmp(&a.to_string(), &b.to_string()),
                    a.cmp(&b),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[rstest]
    // Same length
    #[case(&["1", "2", "3"], &["1", "2", "3"], Ordering::Equal)]
    #[case(&["1", "2", "3"], &["1", "3", "2"], Ordering::Less)]
    #[case(&["1", "2", "4"], &["1", "2", "3"], Ordering::Greater)]
    // Mixed lengths
    #[case(&["1", "a"], &["1", "a", "0"], Ordering::Less)]
    #[case(&["1", "a", "0"], &["1", "a"], Ordering::Greater)]
    #[case(&["1", "b"], &["1", "a", "1000"], Ordering::Greater)]
    // Empty lists
    #[case(&[], &[], Ordering::Equal)]
    #[case(&[], &["alpha"], Ordering::Less)]
    fn identifier_list_cmp_returns_expected(
        #[case] a: &[&str],
        #[case] b: &[&str],
        #[case] expected: Ordering,
    ) {
        assert_eq!(identifier_list_cmp(a, b), expected);

        let a: Vec<Identifier> = a.iter().map(|s| Identifier::new(*s)).collect();
        let b: Vec<Identifier> = b.iter().map(|s| Identifier::new(*s)).collect();
        assert_eq!(a.cmp(&b), expected);
    }

    #[test]
    fn numeric_identifiers_equal_by_value_hash_alike() {
        let a = Identifier::new("007");
        let b = Identifier::new("7");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "007");
    }

    #[rstest]
    #[case("123", true)]
    #[case("0", true)]
    #[case("1a", false)]
    #[case("-1", false)]
    #[case("", false)]
    fn identifier_new_classifies(#[case] value: &str, #[case] numeric: bool) {
        assert_eq!(Identifier::new(value).is_numeric(), numeric);
    }
}
