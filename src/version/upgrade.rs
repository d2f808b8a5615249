//! Newest-release selection over lists of version strings

use std::cmp::Ordering;

use crate::version::semver::{ParseMode, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// How far an upgrade may move away from the current version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpgradeScope {
    /// Same major.minor
    Patch,
    /// Same major
    Minor,
    /// Anything newer
    #[default]
    Major,
}

/// Parse a version string, completing partial versions with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3-rc.1" -> Version(1, 2, 3, ["rc", "1"])
pub fn parse_version(version: &str) -> Option<Version> {
    Version::parse(version, ParseMode::Partial)
        .ok()
        .map(|v| v.completed())
}

/// Find the newest version within `scope` of `current`
///
/// Returns the newest candidate if it is strictly newer than `current`,
/// or None if `current` is already the newest (or unparseable).
pub fn latest_within(
    current_version: &str,
    available_versions: &[String],
    scope: UpgradeScope,
) -> Option<String> {
    let current = parse_version(current_version)?;
    let available: Vec<Version> = available_versions
        .iter()
        .filter_map(|v| parse_version(v))
        .collect();

    newest_within(&current, &available, scope).map(|v| v.to_string())
}

/// Pick the newest of already-parsed `available` versions within `scope` of
/// `current`, if it is strictly newer than `current`
///
/// Partial versions are compared and returned in their completed form, so
/// "1.2" stays within patch scope of "1.2.0".
pub fn newest_within(
    current: &Version,
    available: &[Version],
    scope: UpgradeScope,
) -> Option<Version> {
    let current = current.completed();

    let latest = available
        .iter()
        .map(Version::completed)
        .filter(|v| match scope {
            UpgradeScope::Patch => v.major() == current.major() && v.minor() == current.minor(),
            UpgradeScope::Minor => v.major() == current.major(),
            UpgradeScope::Major => true,
        })
        .max()?;

    (latest > current).then_some(latest)
}

/// Calculate the latest patch version within the same major.minor
pub fn latest_patch(current_version: &str, available_versions: &[String]) -> Option<String> {
    latest_within(current_version, available_versions, UpgradeScope::Patch)
}

/// Calculate the latest minor version within the same major
pub fn latest_minor(current_version: &str, available_versions: &[String]) -> Option<String> {
    latest_within(current_version, available_versions, UpgradeScope::Minor)
}

/// Calculate the latest major version
pub fn latest_major(current_version: &str, available_versions: &[String]) -> Option<String> {
    latest_within(current_version, available_versions, UpgradeScope::Major)
}

/// Compare a current version against the latest known release
pub fn compare_to_latest(current_version: &str, latest_version: &str) -> CompareResult {
    let (Some(current), Some(latest)) =
        (parse_version(current_version), parse_version(latest_version))
    else {
        return CompareResult::Invalid;
    };

    match current.cmp(&latest) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn owned(available: &[&str]) -> Vec<String> {
        available.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "1.2.5", "1.3.0", "2.0.0"], Some("1.2.5".to_string()))]
    #[case("1.2.5", &["1.2.3", "1.2.5", "1.3.0", "2.0.0"], None)] // already latest patch
    #[case("1.2", &["1.2.1", "1.3.0"], Some("1.2.1".to_string()))] // partial current
    #[case("1.2.3-rc.1", &["1.2.3"], Some("1.2.3".to_string()))] // release beats prerelease
    #[case("invalid", &["1.2.3", "1.2.5"], None)] // unparseable current version
    #[case("1.2.3", &["invalid", "not-a-version"], None)] // no valid available versions
    #[case("1.2.3", &[], None)] // empty available versions
    fn test_latest_patch(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        assert_eq!(latest_patch(current, &owned(available)), expected);
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "1.3.0", "1.5.0", "2.0.0"], Some("1.5.0".to_string()))]
    #[case("1.5.0", &["1.2.3", "1.3.0", "1.5.0", "2.0.0"], None)] // already latest minor
    #[case("1.2.3", &["1.9.0-beta.1", "1.8.0"], Some("1.9.0-beta.1".to_string()))]
    #[case("invalid", &["1.2.3", "1.5.0"], None)]
    #[case("1.2.3", &[], None)]
    fn test_latest_minor(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        assert_eq!(latest_minor(current, &owned(available)), expected);
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "2.0.0", "3.0.0"], Some("3.0.0".to_string()))]
    #[case("3.0.0", &["1.2.3", "2.0.0", "3.0.0"], None)] // already latest major
    #[case("1", &["2"], Some("2.0.0".to_string()))] // completed output
    #[case("1.2.3", &["1.2.3+build.5"], None)] // build metadata is not newer
    #[case("1.2.3", &[], None)]
    fn test_latest_major(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        assert_eq!(latest_major(current, &owned(available)), expected);
    }

    #[rstest]
    #[case(UpgradeScope::Patch, Some("1.2.9"))]
    #[case(UpgradeScope::Minor, Some("1.4.0"))]
    #[case(UpgradeScope::Major, Some("18446744073709551616.0.0"))]
    fn newest_within_picks_by_scope(#[case] scope: UpgradeScope, #[case] expected: Option<&str>) {
        let current = Version::parse("1.2", ParseMode::Partial).unwrap();
        let available: Vec<Version> = ["1.2.9", "1.4", "1.3.0-rc.1", "18446744073709551616"]
            .iter()
            .map(|v| Version::parse(v, ParseMode::Partial).unwrap())
            .collect();

        let newest = newest_within(&current, &available, scope);

        assert_eq!(newest.map(|v| v.to_string()).as_deref(), expected);
    }

    #[test]
    fn newest_within_ignores_older_and_equal_versions() {
        let current = Version::new(2, 0, 0);
        let available = vec![
            Version::new(1, 9, 9),
            Version::new(2, 0, 0).with_build(["ci"]).unwrap(),
        ];

        assert_eq!(newest_within(&current, &available, UpgradeScope::Major), None);
        assert_eq!(newest_within(&current, &[], UpgradeScope::Major), None);
    }

    #[rstest]
    #[case("1.0.0", "1.0.0", CompareResult::Latest)]
    #[case("1.0", "1.0.0", CompareResult::Latest)]
    #[case("1.0.0", "2.0.0", CompareResult::Outdated)]
    #[case("2.0.0-rc.1", "2.0.0", CompareResult::Outdated)]
    #[case("3.0.0", "2.0.0", CompareResult::Newer)]
    #[case("invalid", "1.0.0", CompareResult::Invalid)]
    #[case("1.0.0", "latest", CompareResult::Invalid)]
    fn compare_to_latest_returns_expected(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare_to_latest(current, latest), expected);
    }
}
