use souschef_core::extract::extract;

use super::{print_json, CliError};

/// Scan instruction text and print the extracted duration (or `null`).
pub fn run(text: &str) -> Result<(), CliError> {
    print_json(&extract(text))
}
