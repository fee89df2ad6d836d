//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - convert: Single file conversion arguments
//! - batch: Directory conversion arguments
//! - preview: Preview arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod batch;
pub mod completions;
pub mod convert;
pub mod preview;

pub use batch::BatchArgs;
pub use completions::CompletionsArgs;
pub use convert::ConvertArgs;
pub use preview::PreviewArgs;

/// fmconv - blog post frontmatter converter
///
/// Rewrites `title/summary/date/tags/draft` headers as `title/description/publishDate/tags/draft`.
#[derive(Parser, Debug)]
#[command(
    name = "fmconv",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert blog post frontmatter to the new header schema",
    long_about = "fmconv rewrites the YAML header of blog posts: summary becomes description, \
                  date becomes publishDate formatted as 'DD Mon YYYY', strings are double-quoted, \
                  tags are written inline and draft is kept only when true. The post body is \
                  copied byte-for-byte.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fmconv convert post.mdx               \x1b[90m# Convert one post in place\x1b[0m\n   \
                  fmconv convert post.mdx -o new.mdx    \x1b[90m# Write the result elsewhere\x1b[0m\n   \
                  fmconv preview post.mdx               \x1b[90m# Print the result only\x1b[0m\n   \
                  fmconv batch content/post             \x1b[90m# Convert every .mdx file\x1b[0m\n   \
                  fmconv batch . --pattern '*.md'       \x1b[90m# Convert markdown files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one file
    Convert(ConvertArgs),

    /// Convert every matching file in a directory
    Batch(BatchArgs),

    /// Print the converted document without writing it
    Preview(PreviewArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_preview() {
        let cli = Cli::try_parse_from(["fmconv", "preview", "post.mdx"]).unwrap();
        match cli.command {
            Commands::Preview(args) => {
                assert_eq!(args.input.to_str(), Some("post.mdx"));
            }
            _ => panic!("Expected Preview command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["fmconv", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["fmconv", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["fmconv", "batch", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["fmconv", "-q", "-v", "batch"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["fmconv"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
