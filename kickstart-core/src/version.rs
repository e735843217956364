use std::{cmp::Ordering, fmt};

use semver::Version;
use serde::{Serialize, Serializer};

/// A release of the server framework, paired with the Kotlin toolchain it is
/// built against.
///
/// Versions are kept as their literal strings and compared semantically.
/// Literals that are not valid semver fall back to a plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkVersion {
    version: String,
    kotlin: String,
}

impl FrameworkVersion {
    pub fn new(version: impl Into<String>, kotlin: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            kotlin: kotlin.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kotlin_version(&self) -> &str {
        &self.kotlin
    }

    /// The parsed semantic version, if the literal is valid semver.
    pub fn semver(&self) -> Option<Version> {
        Version::parse(&self.version).ok()
    }

    /// Whether this release is at least `major.minor`, ignoring pre-release tags.
    pub fn is_at_least(&self, major: u64, minor: u64) -> bool {
        self.semver()
            .is_some_and(|v| (v.major, v.minor) >= (major, minor))
    }
}

impl Ord for FrameworkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.semver(), other.semver()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.version.cmp(&other.version),
        }
    }
}

impl PartialOrd for FrameworkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for FrameworkVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.version)
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = FrameworkVersion::new("1.0.0-beta-3", "1.3.0");
        assert_eq!(v.version(), "1.0.0-beta-3");
        assert_eq!(v.kotlin_version(), "1.3.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(FrameworkVersion::new("0.9.5", "1.2.70").to_string(), "0.9.5");
    }

    #[test]
    fn test_ordering_is_semantic() {
        let v094 = FrameworkVersion::new("0.9.4", "1.2.61");
        let v095 = FrameworkVersion::new("0.9.5", "1.2.70");
        let beta = FrameworkVersion::new("1.0.0-beta-3", "1.3.0");
        let release = FrameworkVersion::new("1.0.0", "1.3.0");
        let v0910 = FrameworkVersion::new("0.9.10", "1.2.70");

        assert!(v094 < v095);
        assert!(v095 < beta);
        assert!(beta < release);
        // String comparison would get this one wrong
        assert!(v095 < v0910);
    }

    #[test]
    fn test_is_at_least() {
        let beta = FrameworkVersion::new("1.0.0-beta-3", "1.3.0");
        assert!(beta.is_at_least(1, 0));
        assert!(!beta.is_at_least(1, 1));
        assert!(!FrameworkVersion::new("0.9.5", "1.2.70").is_at_least(1, 0));
        assert!(!FrameworkVersion::new("snapshot", "1.3.0").is_at_least(0, 1));
    }

    #[test]
    fn test_serialize() {
        let v = FrameworkVersion::new("0.9.5", "1.2.70");
        assert_eq!(serde_json::to_string(&v).unwrap(), r#""0.9.5""#);
    }
}
