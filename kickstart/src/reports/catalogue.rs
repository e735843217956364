//! Features and versions listing reports.

use super::output::{Output, Report};

/// One selectable feature.
#[derive(Debug)]
pub struct FeatureEntry {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Selectable features by group.
#[derive(Debug)]
pub struct FeaturesReport {
    pub groups: Vec<(String, Vec<FeatureEntry>)>,
}

impl Report for FeaturesReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self
            .groups
            .iter()
            .flat_map(|(_, entries)| entries)
            .map(|entry| entry.id.len())
            .max()
            .unwrap_or(0);

        for (i, (group, entries)) in self.groups.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(group);
            for entry in entries {
                let summary = if entry.description.is_empty() {
                    &entry.title
                } else {
                    &entry.description
                };
                out.list_item(&format!("{:width$}  {}", entry.id, summary));
            }
        }
    }
}

#[derive(Debug)]
pub struct VersionEntry {
    pub version: String,
    pub kotlin: String,
    pub latest: bool,
}

/// Framework releases a project can be generated for.
#[derive(Debug)]
pub struct VersionsReport {
    pub versions: Vec<VersionEntry>,
}

impl Report for VersionsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Ktor versions");
        for entry in &self.versions {
            let marker = if entry.latest { " (latest)" } else { "" };
            out.list_item(&format!("{} with Kotlin {}{}", entry.version, entry.kotlin, marker));
        }
    }
}
