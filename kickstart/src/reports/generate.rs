//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// `group:name:version` of the generated project.
    pub project: String,

    /// Framework release generated for.
    pub framework_version: String,

    /// Selectable features in render order, prerequisites included.
    pub features: Vec<String>,

    /// Where the files went.
    pub result: MaterializeResult,
}

#[derive(Debug)]
pub enum MaterializeResult {
    /// Files were written to a directory.
    Written(WrittenResult),
    /// Files were packed into a zip archive.
    Archived(ArchivedResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or overwritten.
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct ArchivedResult {
    pub path: PathBuf,
    pub entries: usize,
    /// Size of the archive in bytes.
    pub size: usize,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            MaterializeResult::Preview(preview) => self.render_preview(out, preview),
            result => {
                out.key_value("Project", &self.project);
                out.key_value("Ktor", &self.framework_version);
                out.newline();

                out.section(&format!("Features ({})", self.features.len()));
                for feature in &self.features {
                    out.list_item(feature);
                }
                out.newline();

                match result {
                    MaterializeResult::Written(written) => Self::render_written(out, written),
                    MaterializeResult::Archived(archived) => Self::render_archived(out, archived),
                    MaterializeResult::Preview(_) => {}
                }
            }
        }
    }
}

impl GenerateReport {
    fn render_written(out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped existing files (use --force to overwrite)");
            for path in &written.skipped {
                out.skipped_item(path);
            }
        }
    }

    fn render_archived(out: &mut dyn Output, archived: &ArchivedResult) {
        out.key_value(
            "Archive",
            &format!(
                "{} ({} files, {} bytes)",
                archived.path.display(),
                archived.entries,
                archived.size
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(result: MaterializeResult) -> GenerateReport {
        GenerateReport {
            project: "com.example:ktor-sample:0.0.1".to_string(),
            framework_version: "1.0.0-beta-3".to_string(),
            features: vec!["routing".to_string(), "static-content".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(MaterializeResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            written: vec!["build.gradle".to_string()],
            skipped: vec!["src/Application.kt".to_string()],
        }));
        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        Project: com.example:ktor-sample:0.0.1
        Ktor: 1.0.0-beta-3

        Features (2):
          - routing
          - static-content

        Generated: out
          + build.gradle

        Skipped existing files (use --force to overwrite):
          = src/Application.kt
        ");
    }

    #[test]
    fn test_render_preview() {
        let report = report(MaterializeResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "settings.gradle".to_string(),
                content: "rootProject.name = 'ktor-sample'".to_string(),
            }],
        }));
        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        ── settings.gradle ──
        rootProject.name = 'ktor-sample'
        ── Summary ──
        1 files would be generated
        ");
    }
}
