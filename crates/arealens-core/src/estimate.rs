use crate::model::{float_repr, AreaEstimate, ScaleEstimate};

/// Estimate the real-world area of a detected shape from its pixel area and
/// the numbers recovered from recognized text.
///
/// The model is deliberately crude: the shape is treated as a square whose
/// side length equals the largest positive recognized number, expressed in
/// the caller's unit. Degenerate inputs (no shape, no numbers, no positive
/// numbers) produce a zero-area result with the not-applicable scale
/// sentinel and an explanatory note; this function never fails.
pub fn estimate_area(pixel_area: f64, numbers: &[f64], unit: &str) -> AreaEstimate {
    if pixel_area <= 0.0 {
        if numbers.is_empty() {
            return AreaEstimate::not_applicable(
                "Estimation not possible: no shape detected and no numbers found.",
            );
        }
        return AreaEstimate::not_applicable(
            "Estimation not possible: numbers found, but no valid shape detected for scaling.",
        );
    }

    // pixel_area > 0 from here on
    if numbers.is_empty() {
        return AreaEstimate::not_applicable(
            "Estimation not possible: shape detected, but no numbers found to assist with scaling.",
        );
    }

    let positive: Vec<f64> = numbers.iter().copied().filter(|n| *n > 0.0).collect();
    if positive.is_empty() {
        return AreaEstimate::not_applicable(
            "Estimation not possible: shape and numbers found, but no positive numbers available for scaling.",
        );
    }

    let reference = positive.iter().copied().fold(f64::MIN, f64::max);

    // Effective side length if the shape were a square; > 0 since pixel_area > 0
    let side_pixels = pixel_area.sqrt();

    let scale_factor = reference / side_pixels; // units per pixel
    let estimated_area = pixel_area * scale_factor * scale_factor; // units squared

    let notes = format!(
        "Highly approximate area. Assumed the largest positive detected number \
         ({} {}) corresponds to one side of a square with the same area \
         ({:.2} pixels\u{b2}) as the detected shape outline. This is a very rough estimation.",
        float_repr(reference),
        unit,
        pixel_area
    );

    AreaEstimate {
        estimated_area,
        scale: ScaleEstimate::UnitsPerPixel {
            reference,
            unit: unit.to_string(),
            side_pixels,
        },
        notes,
    }
}
