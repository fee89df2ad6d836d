//! Batch command implementation
//!
//! Converts every matching file in one directory and prints a
//! `succeeded/total` summary. Individual failures do not fail the command.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::BatchArgs;
use crate::commands::helpers::{converted_line, failed_line};
use crate::converter::{BatchOptions, BatchSummary, ConversionOutcome, convert_directory};
use crate::error::Result;
use crate::error::fs::io_error;

/// Run batch command
pub fn run(args: &BatchArgs, quiet: bool) -> Result<()> {
    let options = BatchOptions {
        atomic: args.atomic,
    };
    let show_lines = !quiet && !args.json;

    let mut progress: Option<ProgressBar> = None;
    let summary = convert_directory(&args.dir, &args.pattern, options, |outcome, index, total| {
        let pb = progress.get_or_insert_with(|| new_progress(total, quiet));
        pb.suspend(|| print_outcome(outcome, show_lines));
        pb.set_position(index as u64);
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        print_json(&summary)?;
    } else if !quiet {
        print_summary(&summary, args);
    }
    Ok(())
}

fn new_progress(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {pos}/{len} files")
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let pb = ProgressBar::new(total as u64);
    pb.set_style(style);
    pb
}

fn print_outcome(outcome: &ConversionOutcome, show_lines: bool) {
    match outcome {
        ConversionOutcome::Converted { input, output } => {
            if show_lines {
                println!("{}", converted_line(input, output));
            }
        }
        ConversionOutcome::Failed { input, cause } => {
            eprintln!("{}", failed_line(input, cause));
        }
    }
}

fn print_summary(summary: &BatchSummary, args: &BatchArgs) {
    if summary.total == 0 {
        println!(
            "No {} files found in {}",
            args.pattern,
            args.dir.display()
        );
        return;
    }

    let style = if summary.failed() == 0 {
        Style::new().green().bold()
    } else {
        Style::new().yellow().bold()
    };
    println!(
        "{} {summary} files successfully",
        style.apply_to("Converted")
    );
}

fn print_json(summary: &BatchSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(&summary.report())
        .map_err(|e| io_error(format!("Failed to serialize summary: {e}")))?;
    println!("{json}");
    Ok(())
}
