use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ResumeForgeError;
use crate::markdown;
use crate::pdf;
use crate::types::{ComposedResume, TemplateConfig};

/// Supported output formats. Static dispatch — adding a format means
/// adding a variant here, not registering anything at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ResumeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ResumeForgeError::Config(format!(
                "unsupported export format '{}'",
                other
            ))),
        }
    }
}

/// What an export produced: rendered text, or a file on disk.
#[derive(Debug, Clone)]
pub enum ExportOutput {
    Inline(String),
    Written(PathBuf),
}

/// Render a composed resume.
///
/// Markdown treats the destination as optional: absent means return the
/// rendered text. PDF requires one and fails with a configuration error
/// otherwise, since there is no meaningful in-memory preview.
pub fn export(
    format: ExportFormat,
    resume: &ComposedResume,
    destination: Option<&Path>,
) -> Result<ExportOutput, ResumeForgeError> {
    match format {
        ExportFormat::Markdown => {
            let body = markdown::render(resume);
            match destination {
                Some(path) => {
                    std::fs::write(path, &body)?;
                    Ok(ExportOutput::Written(path.to_path_buf()))
                }
                None => Ok(ExportOutput::Inline(body)),
            }
        }
        ExportFormat::Pdf => {
            let path = destination.ok_or_else(|| {
                ResumeForgeError::Config("pdf export requires a destination path".to_string())
            })?;
            pdf::write_pdf(resume, path)?;
            Ok(ExportOutput::Written(path.to_path_buf()))
        }
    }
}

/// Derive the output filename: explicit argument, then the template's
/// output override, then the template key with hyphens. The format
/// extension is appended when missing.
pub fn output_filename(
    config: &TemplateConfig,
    format: ExportFormat,
    explicit: Option<&str>,
) -> String {
    let custom = config
        .output
        .as_ref()
        .and_then(|o| o.filename.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let base = match (explicit, custom) {
        (Some(name), _) => name.to_string(),
        (None, Some(name)) => name.to_string(),
        (None, None) => config.template.replace('_', "-"),
    };

    ensure_extension(base, format.extension())
}

fn ensure_extension(name: String, ext: &str) -> String {
    let suffix = format!(".{}", ext);
    if name.to_lowercase().ends_with(&suffix) {
        name
    } else {
        format!("{}{}", name, suffix)
    }
}
