//! Command helper utilities

use std::path::Path;

use console::Style;

use crate::error::ConvertError;

/// Status line for a converted file
pub fn converted_line(input: &Path, output: &Path) -> String {
    let label = Style::new().green().bold().apply_to("Successfully converted");
    if input == output {
        format!("{label} {}", input.display())
    } else {
        format!("{label} {} -> {}", input.display(), output.display())
    }
}

/// Status line for a file that could not be converted
///
/// Missing headers carry the path in their own message.
pub fn failed_line(input: &Path, cause: &ConvertError) -> String {
    let label = Style::new().for_stderr().red().bold();
    if cause.is_missing_header() {
        format!("{}", label.apply_to(cause))
    } else {
        format!(
            "{} {}: {cause}",
            label.apply_to("Error processing"),
            input.display()
        )
    }
}
