//! Preview command implementation
//!
//! Prints the converted document to stdout and leaves the file alone.

use crate::cli::PreviewArgs;
use crate::converter::{convert_str, read_document};
use crate::error::Result;

/// Run preview command
pub fn run(args: &PreviewArgs) -> Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

fn render(args: &PreviewArgs) -> Result<String> {
    let content = read_document(&args.input)?;
    convert_str(&content).map_err(|e| e.with_path(&args.input))
}
