//! Supported framework releases.

use std::sync::LazyLock;

use kickstart_core::FrameworkVersion;

/// Known releases, oldest first. Only [`offered`] ones can be generated.
static KNOWN: LazyLock<Vec<FrameworkVersion>> = LazyLock::new(|| {
    vec![
        FrameworkVersion::new("0.9.4", "1.2.61"),
        FrameworkVersion::new("0.9.5", "1.2.70"),
        FrameworkVersion::new("1.0.0-beta-3", "1.3.0"),
    ]
});

const OFFERED: &[&str] = &["0.9.5", "1.0.0-beta-3"];
const LATEST: &str = "1.0.0-beta-3";

/// Releases a project can be generated for, oldest first.
pub fn offered() -> impl Iterator<Item = &'static FrameworkVersion> {
    KNOWN.iter().filter(|v| OFFERED.contains(&v.version()))
}

pub fn latest() -> &'static FrameworkVersion {
    // LATEST is always part of KNOWN
    find(LATEST).unwrap_or(&KNOWN[KNOWN.len() - 1])
}

/// Look up an offered release by its exact version string.
pub fn find(version: &str) -> Option<&'static FrameworkVersion> {
    offered().find(|v| v.version() == version)
}
