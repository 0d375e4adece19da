use arealens_core::model::AreaEstimate;

pub fn format_numbers(numbers: &[f64]) -> String {
    if numbers.is_empty() {
        return "no numbers found".to_string();
    }
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_estimate(estimate: &AreaEstimate, unit: &str) -> String {
    let area = if estimate.estimated_area > 0.0 {
        format!("{:.2} {}\u{b2}", estimate.estimated_area, unit)
    } else {
        "N/A".to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("Estimated area:  {area}\n"));
    out.push_str(&format!("Scale:           {}\n", estimate.scale));
    out.push_str(&format!("Notes:           {}\n", estimate.notes));
    out
}
