//! Explain command report data structures.

use super::output::{Output, Report};

/// Everything known about one feature.
#[derive(Debug)]
pub struct ExplainReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub documentation: String,
    pub group: String,
    /// Direct prerequisites.
    pub requires: Vec<String>,
    pub artifacts: Vec<String>,
    pub repositories: Vec<String>,
    /// Features rendered when this one is selected, in render order.
    pub render_order: Vec<String>,
    /// Features rendered before any selection.
    pub base: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Feature", &format!("{} ({})", self.id, self.title));
        out.key_value("Group", &self.group);
        if !self.description.is_empty() {
            out.key_value("Description", &self.description);
        }
        if !self.documentation.is_empty() {
            out.key_value("Documentation", &self.documentation);
        }

        for (name, items) in [
            ("Requires", &self.requires),
            ("Artifacts", &self.artifacts),
            ("Repositories", &self.repositories),
        ] {
            if items.is_empty() {
                continue;
            }
            out.newline();
            out.section(name);
            for item in items {
                out.list_item(item);
            }
        }

        out.newline();
        out.section("Render order");
        for (i, id) in self.base.iter().chain(&self.render_order).enumerate() {
            let note = if self.base.contains(id) { " (always)" } else { "" };
            out.preformatted(&format!("  {}. {}{}", i + 1, id, note));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_explain() {
        let report = ExplainReport {
            id: "static-content".to_string(),
            title: "Static Content".to_string(),
            description: "Serves static files".to_string(),
            documentation: String::new(),
            group: "server".to_string(),
            requires: vec!["routing".to_string()],
            artifacts: vec!["io.ktor:ktor-server-core:$ktor_version".to_string()],
            repositories: Vec::new(),
            render_order: vec!["routing".to_string(), "static-content".to_string()],
            base: vec!["build-gradle".to_string(), "application".to_string()],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        Feature: static-content (Static Content)
        Group: server
        Description: Serves static files

        Requires:
          - routing

        Artifacts:
          - io.ktor:ktor-server-core:$ktor_version

        Render order:
          1. build-gradle (always)
          2. application (always)
          3. routing
          4. static-content
        ");
    }
}
