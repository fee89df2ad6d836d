use clap::Parser;
use std::path::PathBuf;

/// Arguments for the preview command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show what a post would look like after conversion:\n    fmconv preview posts/pointer-problems.mdx")]
pub struct PreviewArgs {
    /// File to preview; it is never modified
    pub input: PathBuf,
}
