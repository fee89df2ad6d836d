use clap::Parser;
use std::path::PathBuf;

use crate::converter::DEFAULT_PATTERN;

/// Arguments for the batch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert every .mdx file in the current directory:\n    fmconv batch\n\n\
                  Convert markdown posts in another directory:\n    fmconv batch content/post --pattern '*.md'\n\n\
                  Print a JSON summary:\n    fmconv batch content/post --json")]
pub struct BatchArgs {
    /// Directory to scan (not recursive)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob matched against file names
    #[arg(long, short = 'p', default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Write each file through a temporary file and rename it into place
    #[arg(long)]
    pub atomic: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
