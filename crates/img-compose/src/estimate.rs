//! Output size prediction
//!
//! Pure heuristics mapping (original size, quality, source format) to a
//! predicted output size, cheap enough to recompute on every slider
//! movement. No pixel work happens here; real sizes come from the
//! transcoder and may differ.

use crate::constants::{LOSSLESS_RETENTION_FACTOR, MIN_REDUCTION_FACTOR, SIZE_UNITS};
use crate::types::*;

/// Predict the encoded size of a single image.
///
/// The reduction factor falls linearly with quality and is floored at
/// 10% of the original. Losslessly-compressed sources (PNG) resist
/// re-encoding, so their prediction never drops below 80% of the
/// original.
pub fn estimate_size(original_bytes: u64, quality: u8, lossless: bool) -> Result<f64> {
    validate_quality(quality)?;

    let ratio = f64::from(quality) / 100.0;
    let reduction = (1.0 - 0.9 * (1.0 - ratio)).max(MIN_REDUCTION_FACTOR);
    let mut predicted = original_bytes as f64 * reduction;

    if lossless {
        predicted = predicted.max(original_bytes as f64 * LOSSLESS_RETENTION_FACTOR);
    }

    Ok(predicted)
}

/// Predict the total encoded size of a batch. Each image's own format
/// decides whether the lossless floor applies; a batch may mix formats.
pub fn estimate_total_size<'a, I>(images: I, quality: u8) -> Result<f64>
where
    I: IntoIterator<Item = &'a SourceImage>,
{
    let mut total = 0.0;
    for image in images {
        total += estimate_size(image.byte_len(), quality, image.is_lossless())?;
    }
    Ok(total)
}

/// Format a byte count as a human-readable string using the binary
/// (1024-based) unit ladder, rounded to two decimals with trailing
/// zeros trimmed: `"2.35 MB"`, `"1.5 KB"`, `"0 Bytes"`.
pub fn format_byte_size(bytes: f64) -> String {
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[exponent])
}

pub(crate) fn validate_quality(quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(ComposeError::InvalidArgument(format!(
            "Quality must be in 1..=100, got {}",
            quality
        )));
    }
    Ok(())
}
