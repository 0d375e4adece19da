use arealens_core::error::ArealensError;
use arealens_core::extract::extract_numbers;
use std::path::PathBuf;

use crate::output;

pub fn run(
    text: Option<String>,
    file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), ArealensError> {
    let text = match (text, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => std::io::read_to_string(std::io::stdin())?,
    };

    let numbers = extract_numbers(&text);

    match output_format {
        "json" => output::json::print_numbers(&numbers)?,
        _ => println!("{}", output::table::format_numbers(&numbers)),
    }

    Ok(())
}
