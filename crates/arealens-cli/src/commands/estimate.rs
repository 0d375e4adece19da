use arealens_core::error::ArealensError;
use arealens_core::estimate::estimate_area;
use arealens_core::extract::extract_numbers;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pixel_area: f64,
    text: Option<String>,
    mut numbers: Vec<f64>,
    unit: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ArealensError> {
    if let Some(ref text) = text {
        numbers.extend(extract_numbers(text));
    }

    let estimate = estimate_area(pixel_area, &numbers, unit);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&estimate)?;
            std::fs::write(&path, json)?;
            eprintln!("Estimate written to {}", path.display());
        }
        None => match output_format {
            "json" => output::json::print_estimate(&estimate)?,
            _ => print!("{}", output::table::format_estimate(&estimate, unit)),
        },
    }

    Ok(())
}
