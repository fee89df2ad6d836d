use clap::Parser;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert a post in place:\n    fmconv convert posts/pointer-problems.mdx\n\n\
                  Write the result somewhere else:\n    fmconv convert old.mdx --output new.mdx\n\n\
                  Replace the file through a temporary file:\n    fmconv convert post.mdx --atomic")]
pub struct ConvertArgs {
    /// File to convert
    pub input: PathBuf,

    /// Write the converted document here instead of overwriting the input
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write to a temporary file first and rename it over the destination
    #[arg(long)]
    pub atomic: bool,
}
