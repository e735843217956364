//! Features and versions listings.

use kickstart_codegen::feature::FeatureGroup;
use kickstart_features::{registry, versions as releases};

use crate::reports::{FeatureEntry, FeaturesReport, VersionEntry, VersionsReport};

/// Selectable features, grouped, in registry order.
pub fn features() -> FeaturesReport {
    let groups = [FeatureGroup::Server, FeatureGroup::Client]
        .into_iter()
        .map(|group| {
            let entries = registry()
                .group(group)
                .map(|feature| FeatureEntry {
                    id: feature.id.to_string(),
                    title: feature.title.to_string(),
                    description: feature.description.to_string(),
                })
                .collect();
            (group.to_string(), entries)
        })
        .collect();
    FeaturesReport { groups }
}

pub fn versions() -> VersionsReport {
    let latest = releases::latest();
    let versions = releases::offered()
        .map(|version| VersionEntry {
            version: version.version().to_string(),
            kotlin: version.kotlin_version().to_string(),
            latest: version == latest,
        })
        .collect();
    VersionsReport { versions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_listing() {
        let report = features();
        let names: Vec<_> = report.groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["server", "client"]);

        let ids: Vec<_> = report.groups.iter().flat_map(|(_, e)| e).map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"default-headers"));
        assert!(ids.contains(&"ktor-client-websocket"));
        assert!(!ids.contains(&"application"));
        assert_eq!(ids.len(), registry().public().count());
    }

    #[test]
    fn test_versions_listing() {
        let report = versions();
        let listed: Vec<_> = report
            .versions
            .iter()
            .map(|v| (v.version.as_str(), v.latest))
            .collect();
        assert_eq!(listed, [("0.9.5", false), ("1.0.0-beta-3", true)]);
    }
}
