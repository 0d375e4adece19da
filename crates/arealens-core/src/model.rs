use serde::{Deserialize, Serialize};
use std::fmt;

/// The scale used to convert a pixel-space area into the caller's unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaleEstimate {
    /// No usable reference length was available, so no scaling was performed.
    NotApplicable,
    /// Units-per-pixel scale derived from the largest positive recognized
    /// number and the effective square side of the detected shape.
    UnitsPerPixel {
        /// Reference length recovered from recognized text.
        reference: f64,
        /// Caller-supplied unit label, echoed back verbatim.
        unit: String,
        /// Effective side length of the shape in pixels (sqrt of pixel area).
        side_pixels: f64,
    },
}

impl ScaleEstimate {
    pub fn is_applicable(&self) -> bool {
        matches!(self, ScaleEstimate::UnitsPerPixel { .. })
    }
}

impl fmt::Display for ScaleEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleEstimate::NotApplicable => write!(f, "not applicable"),
            ScaleEstimate::UnitsPerPixel {
                reference,
                unit,
                side_pixels,
            } => write!(
                f,
                "{} {} / {:.2} pixels (estimated scale)",
                float_repr(*reference),
                unit,
                side_pixels
            ),
        }
    }
}

/// Render a reference length so it always reads as a decimal ("10.0",
/// never "10"), matching how the values appear in the notes.
pub(crate) fn float_repr(v: f64) -> String {
    let s = v.to_string();
    if s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Result of one area estimation. Created fresh per call, no identity
/// beyond its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEstimate {
    /// Estimated area in the caller's unit squared. Zero whenever no
    /// positive reference and positive pixel area were both available.
    pub estimated_area: f64,
    /// The scale that produced the estimate, or the not-applicable sentinel.
    pub scale: ScaleEstimate,
    /// Human-readable explanation of the outcome, including the caveat that
    /// a positive estimate rests on the square-shape assumption.
    pub notes: String,
}

impl AreaEstimate {
    pub(crate) fn not_applicable(notes: impl Into<String>) -> AreaEstimate {
        AreaEstimate {
            estimated_area: 0.0,
            scale: ScaleEstimate::NotApplicable,
            notes: notes.into(),
        }
    }
}

/// Full analysis of one uploaded image: what was detected, what was
/// recognized, and the resulting estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Unit label the caller asked for.
    pub unit: String,
    /// Raw text from the recognition backend (may be empty or garbled).
    pub recognized_text: String,
    /// Numbers extracted from the recognized text, in order of appearance.
    pub extracted_numbers: Vec<f64>,
    /// How many shape outlines the detector found.
    pub contour_count: usize,
    /// Pixel area of the largest detected outline (0 when none).
    pub largest_contour_area_pixels: f64,
    /// The area estimate computed from the above.
    pub estimate: AreaEstimate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_repr_keeps_decimal_point() {
        assert_eq!(float_repr(10.0), "10.0");
        assert_eq!(float_repr(45.67), "45.67");
        assert_eq!(float_repr(0.5), "0.5");
        assert_eq!(float_repr(-10.0), "-10.0");
    }

    #[test]
    fn scale_display_not_applicable() {
        assert_eq!(ScaleEstimate::NotApplicable.to_string(), "not applicable");
    }

    #[test]
    fn scale_display_units_per_pixel() {
        let scale = ScaleEstimate::UnitsPerPixel {
            reference: 10.0,
            unit: "cm".into(),
            side_pixels: 10.0,
        };
        assert_eq!(scale.to_string(), "10.0 cm / 10.00 pixels (estimated scale)");
    }
}
