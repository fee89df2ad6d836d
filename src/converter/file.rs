//! Single file conversion.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::fs::{read_failed, write_failed};
use crate::error::{ConvertError, Result};
use crate::frontmatter::{BOUNDARY, extract, map_header, render_header};

/// Options for converting one file
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Destination path; `None` overwrites the input
    pub output: Option<PathBuf>,
    /// Write through a temporary file in the destination directory and rename it into place
    pub atomic: bool,
}

/// Outcome of converting one file
#[derive(Debug)]
pub enum ConversionOutcome {
    Converted { input: PathBuf, output: PathBuf },
    Failed { input: PathBuf, cause: ConvertError },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    pub fn input(&self) -> &Path {
        match self {
            ConversionOutcome::Converted { input, .. } | ConversionOutcome::Failed { input, .. } => {
                input
            }
        }
    }

    pub fn cause(&self) -> Option<&ConvertError> {
        match self {
            ConversionOutcome::Converted { .. } => None,
            ConversionOutcome::Failed { cause, .. } => Some(cause),
        }
    }
}

/// Convert a whole document in memory.
///
/// The result is the opening boundary, the rendered new-schema header, the
/// closing boundary and the original body byte-for-byte.
pub fn convert_str(content: &str) -> Result<String> {
    let document = extract(content)?;
    tracing::debug!(keys = document.header.len(), "parsed frontmatter");

    let header = map_header(&document.header);
    if header.is_empty() {
        tracing::warn!("no recognized frontmatter keys, writing an empty header");
    } else {
        tracing::debug!(keys = header.len(), "mapped frontmatter");
    }

    Ok(format!(
        "{BOUNDARY}\n{}\n{BOUNDARY}\n{}",
        render_header(&header),
        document.body
    ))
}

/// Convert one file, writing to `options.output` or back over `input`.
///
/// Every failure is captured in the returned outcome and left to the caller
/// to report. When the input cannot be read or has no usable header nothing
/// is written.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> ConversionOutcome {
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| input.to_path_buf());

    match try_convert_file(input, &output, options.atomic) {
        Ok(()) => {
            tracing::info!(input = %input.display(), output = %output.display(), "converted");
            ConversionOutcome::Converted {
                input: input.to_path_buf(),
                output,
            }
        }
        Err(cause) => {
            tracing::debug!(input = %input.display(), error = %cause, "conversion failed");
            ConversionOutcome::Failed {
                input: input.to_path_buf(),
                cause,
            }
        }
    }
}

fn try_convert_file(input: &Path, output: &Path, atomic: bool) -> Result<()> {
    let content = read_document(input)?;
    let converted = convert_str(&content).map_err(|e| e.with_path(input))?;

    if atomic {
        write_atomic(output, &converted)
    } else {
        fs::write(output, converted).map_err(|e| write_failed(output, e))
    }
}

/// Read a document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_failed(path, e))
}

fn write_atomic(output: &Path, content: &str) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(output, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_failed(output, e))?;
    temp.persist(output)
        .map_err(|e| write_failed(output, e.error))?;
    Ok(())
}
