//! Directory conversion.
//!
//! Matches file names in one directory (not recursive) against a glob and
//! converts each match in place, in file name order.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::file::{ConversionOutcome, ConvertOptions, convert_file};
use crate::error::Result;
use crate::error::batch::invalid_pattern;
use crate::error::fs::dir_read_failed;

/// Pattern used when none is given
pub const DEFAULT_PATTERN: &str = "*.mdx";

/// Options for converting a directory
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Write each file through a temporary file and rename it into place
    pub atomic: bool,
}

/// Tally of a directory conversion
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    fn record(&mut self, outcome: ConversionOutcome) {
        self.total += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Machine-readable form of the summary
    pub fn report(&self) -> BatchReport {
        BatchReport {
            total: self.total,
            succeeded: self.succeeded,
            failed: self
                .outcomes
                .iter()
                .filter_map(|outcome| {
                    outcome.cause().map(|cause| FailedFile {
                        path: outcome.input().display().to_string(),
                        error: cause.to_string(),
                    })
                })
                .collect(),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.total)
    }
}

/// Serializable batch summary for `--json` output
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<FailedFile>,
}

#[derive(Debug, Serialize)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}

/// List regular files directly inside `dir` whose name matches `pattern`.
///
/// Sorted by file name.
pub fn find_matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(pattern).map_err(|e| invalid_pattern(pattern, e))?;

    let metadata = fs::metadata(dir).map_err(|e| dir_read_failed(dir, e))?;
    if !metadata.is_dir() {
        return Err(dir_read_failed(dir, "not a directory"));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| dir_read_failed(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if glob.matched(&CandidatePath::from(name)).is_some() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Convert every file in `dir` matching `pattern`, in place.
///
/// `on_outcome` is called after each file, before the next one starts.
/// Only an invalid pattern or an unreadable directory is an error; failing
/// files are recorded in the summary.
pub fn convert_directory<F>(
    dir: &Path,
    pattern: &str,
    options: BatchOptions,
    mut on_outcome: F,
) -> Result<BatchSummary>
where
    F: FnMut(&ConversionOutcome, usize, usize),
{
    let files = find_matching_files(dir, pattern)?;
    tracing::debug!(dir = %dir.display(), pattern, count = files.len(), "matched files");

    let file_options = ConvertOptions {
        output: None,
        atomic: options.atomic,
    };

    let total = files.len();
    let mut summary = BatchSummary::default();
    for (index, path) in files.iter().enumerate() {
        let outcome = convert_file(path, &file_options);
        on_outcome(&outcome, index + 1, total);
        summary.record(outcome);
    }

    tracing::info!(
        succeeded = summary.succeeded,
        total = summary.total,
        "batch finished"
    );
    Ok(summary)
}
