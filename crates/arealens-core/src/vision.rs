use crate::error::ArealensError;

/// Shape outlines found in an image by a detection backend.
#[derive(Debug, Clone, Default)]
pub struct ShapeDetection {
    /// Number of outlines found.
    pub contour_count: usize,
    /// Pixel area of the largest outline. Zero means nothing usable.
    pub largest_area_pixels: f64,
}

/// Trait for shape detection backends (e.g. a threshold-and-contour pass).
pub trait ShapeDetector: Send + Sync {
    /// Find shape outlines in encoded image bytes.
    fn detect_shapes(&self, image_bytes: &[u8]) -> Result<ShapeDetection, ArealensError>;

    /// Name of this detection backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for optical text recognition backends.
pub trait TextRecognizer: Send + Sync {
    /// Recognize printed text in encoded image bytes. May return an empty
    /// string when the image carries no readable text.
    fn recognize_text(&self, image_bytes: &[u8]) -> Result<String, ArealensError>;

    /// Name of this recognition backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
