//! Generate operation - materialising a generation result.

use std::{
    io::{Cursor, Write},
    path::Path,
};

use eyre::{Result, WrapErr, bail};
use kickstart_codegen::generation::GenerationResult;
use kickstart_core::{FileContent, Overwrite, WriteResult, write_file};
use kickstart_features::{GenerationRequest, registry};
use tracing::debug;
use zip::{ZipWriter, write::SimpleFileOptions};

use crate::reports::{
    ArchivedResult, GenerateReport, MaterializeResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Where the generated files go.
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    Directory(&'a Path),
    Archive(&'a Path),
    /// Print instead of writing.
    Preview,
}

/// Execute the generate operation for an already generated result.
pub fn generate(
    request: &GenerationRequest,
    result: &GenerationResult,
    destination: Destination<'_>,
    overwrite: Overwrite,
) -> Result<GenerateReport> {
    let version = request.version()?;
    let features = registry()
        .resolve(&request.selected())?
        .into_iter()
        .filter(|feature| !feature.is_internal())
        .map(|feature| feature.id.to_string())
        .collect();

    let result = match destination {
        Destination::Directory(dir) => MaterializeResult::Written(write_directory(result, dir, overwrite)?),
        Destination::Archive(path) => MaterializeResult::Archived(write_archive(result, path, overwrite)?),
        Destination::Preview => MaterializeResult::Preview(preview(result)),
    };

    let project = &request.project;
    Ok(GenerateReport {
        project: format!("{}:{}:{}", project.group, project.name, project.version),
        framework_version: version.version().to_string(),
        features,
        result,
    })
}

/// Write every file below `dir`, creating directories as needed.
pub fn write_directory(result: &GenerationResult, dir: &Path, overwrite: Overwrite) -> Result<WrittenResult> {
    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for (path, content) in &result.files {
        let target = dir.join(path);
        let outcome = content
            .write(&target, overwrite)
            .wrap_err_with(|| format!("failed to write {}", target.display()))?;
        debug!(path = %target.display(), ?outcome, "materialised file");
        match outcome {
            WriteResult::Written => written.push(path.clone()),
            WriteResult::Skipped => skipped.push(path.clone()),
        }
    }
    Ok(WrittenResult {
        output_dir: dir.to_path_buf(),
        written,
        skipped,
    })
}

/// Pack every file into a deflated zip archive at `path`.
pub fn write_archive(result: &GenerationResult, path: &Path, overwrite: Overwrite) -> Result<ArchivedResult> {
    if overwrite == Overwrite::IfMissing && path.exists() {
        bail!("{} already exists, use --force to overwrite it", path.display());
    }

    let bytes = archive(result)?;
    write_file(path, &bytes).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(ArchivedResult {
        path: path.to_path_buf(),
        entries: result.files.len(),
        size: bytes.len(),
    })
}

/// Zip archive of a generation result, entries in path order.
pub fn archive(result: &GenerationResult) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (path, content) in &result.files {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(content.as_bytes())?;
        }

        zip.finish()?;
    }
    Ok(buffer)
}

fn preview(result: &GenerationResult) -> PreviewResult {
    let files = result
        .files
        .iter()
        .map(|(path, content)| PreviewFile {
            path: path.clone(),
            content: match content {
                FileContent::Text(text) => text.trim_end().to_string(),
                FileContent::Binary(bytes) => match std::str::from_utf8(bytes) {
                    Ok(text) => text.trim_end().to_string(),
                    Err(_) => format!("<{} bytes of binary content>", bytes.len()),
                },
            },
        })
        .collect();
    PreviewResult { files }
}
