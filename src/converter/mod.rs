//! Frontmatter conversion of files and directories
//!
//! [`convert_file`] runs extract, map, render and write for one file and
//! reports the result as a [`ConversionOutcome`] instead of an error, so that
//! [`convert_directory`] can carry on with the next file.

mod batch;
mod file;

pub use batch::{BatchOptions, BatchSummary, DEFAULT_PATTERN, convert_directory};
pub use file::{ConversionOutcome, ConvertOptions, convert_file, convert_str, read_document};
