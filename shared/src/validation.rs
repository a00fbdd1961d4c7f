//! Input normalization and validation utilities
//!
//! Weather values arrive from sources that are not fully trusted, so the
//! engine clamps instead of rejecting.

use rust_decimal::Decimal;

/// Clamp humidity into [0, 100] percent
pub fn clamp_humidity(humidity: Decimal) -> Decimal {
    humidity.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
}

/// Clamp rainfall to be non-negative
pub fn clamp_rainfall(rainfall: Decimal) -> Decimal {
    rainfall.max(Decimal::ZERO)
}

/// Convert a float to a decimal
///
/// Values beyond the decimal range (infinities included) saturate at
/// `Decimal::MAX` / `Decimal::MIN`; only NaN becomes zero.
pub fn decimal_from_f64(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    match Decimal::from_f64_retain(value) {
        Some(d) => d.round_dp(4),
        None if value.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Convert a decimal to a float for display or wire formats
pub fn decimal_to_f64(value: Decimal) -> f64 {
    f64::try_from(value).unwrap_or(0.0)
}

/// Validate a location name passed to the weather provider
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location must not be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Location must be at most 100 characters");
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err("Location must not contain control characters");
    }
    Ok(())
}

/// Validate a classifier confidence threshold
pub fn validate_confidence_threshold(threshold: f64) -> Result<(), &'static str> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err("Confidence threshold must be between 0 and 1");
    }
    Ok(())
}

/// Allowed leaf image extensions
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Uploads smaller than this are treated as corrupt
pub const MIN_IMAGE_BYTES: usize = 1024;

/// Check that an uploaded filename has an accepted image extension
pub fn is_allowed_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Validate an uploaded leaf image before it is sent for classification
pub fn validate_image_upload(filename: &str, size_bytes: usize) -> Result<(), &'static str> {
    if filename.trim().is_empty() {
        return Err("No file selected. Please upload an image.");
    }
    if !is_allowed_image(filename) {
        return Err("Unsupported file format. Please upload JPG or PNG image.");
    }
    if size_bytes < MIN_IMAGE_BYTES {
        return Err("File too small or corrupted. Please upload a valid image.");
    }
    Ok(())
}
