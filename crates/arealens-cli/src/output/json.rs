use arealens_core::error::ArealensError;
use arealens_core::model::AreaEstimate;

pub fn print_numbers(numbers: &[f64]) -> Result<(), ArealensError> {
    let json = serde_json::to_string_pretty(&numbers)?;
    println!("{json}");
    Ok(())
}

pub fn print_estimate(estimate: &AreaEstimate) -> Result<(), ArealensError> {
    let json = serde_json::to_string_pretty(estimate)?;
    println!("{json}");
    Ok(())
}
