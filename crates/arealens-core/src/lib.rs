pub mod error;
pub mod estimate;
pub mod extract;
pub mod model;
pub mod vision;

use error::ArealensError;
use model::ImageAnalysis;
use vision::{ShapeDetector, TextRecognizer};

/// Main API entry point: analyze an uploaded image and estimate the area of
/// its dominant shape in the caller's unit.
///
/// Runs shape detection and text recognition over the image bytes, extracts
/// numbers from the recognized text, and feeds both into the area estimator.
/// A missing recognition backend is a hard error; any other recognition
/// failure degrades to "no text found" and the estimation still runs.
pub fn analyze_image(
    image_bytes: &[u8],
    detector: &dyn ShapeDetector,
    recognizer: &dyn TextRecognizer,
    unit: &str,
) -> Result<ImageAnalysis, ArealensError> {
    let detection = detector.detect_shapes(image_bytes)?;

    let recognized_text = match recognizer.recognize_text(image_bytes) {
        Ok(text) => text,
        Err(e @ ArealensError::RecognizerUnavailable(_)) => return Err(e),
        Err(_) => String::new(),
    };

    let extracted_numbers = extract::extract_numbers(&recognized_text);

    let estimate = estimate::estimate_area(
        detection.largest_area_pixels,
        &extracted_numbers,
        unit,
    );

    Ok(ImageAnalysis {
        unit: unit.to_string(),
        recognized_text,
        extracted_numbers,
        contour_count: detection.contour_count,
        largest_contour_area_pixels: detection.largest_area_pixels,
        estimate,
    })
}
