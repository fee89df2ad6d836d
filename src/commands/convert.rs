//! Convert command implementation

use crate::cli::ConvertArgs;
use crate::commands::helpers::converted_line;
use crate::converter::{ConversionOutcome, ConvertOptions, convert_file};
use crate::error::Result;

/// Run convert command
///
/// A failed conversion is returned as the command error so the process
/// exits non-zero.
pub fn run(args: ConvertArgs, quiet: bool) -> Result<()> {
    let options = ConvertOptions {
        output: args.output,
        atomic: args.atomic,
    };

    match convert_file(&args.input, &options) {
        ConversionOutcome::Converted { input, output } => {
            if !quiet {
                println!("{}", converted_line(&input, &output));
            }
            Ok(())
        }
        ConversionOutcome::Failed { cause, .. } => Err(cause),
    }
}
