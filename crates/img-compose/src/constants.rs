//! Shared constants for compression and document assembly
//!
//! This module centralizes magic numbers and constants used throughout
//! the pipeline.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Defaults
// =============================================================================

/// Default page margin in millimeters (A4 portrait assembly)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// =============================================================================
// Encoding
// =============================================================================

/// Default lossy quality for document export
pub const DEFAULT_PDF_QUALITY: u8 = 95;

/// Fixed JPEG quality used on the grayscale path
pub const GRAYSCALE_JPEG_QUALITY: u8 = 90;

// =============================================================================
// Size Estimation
// =============================================================================

/// Floor on the achievable reduction factor: predicted size never drops
/// below this fraction of the original
pub const MIN_REDUCTION_FACTOR: f64 = 0.1;

/// Fraction of the original size that losslessly-compressed input retains
/// when naively re-encoded
pub const LOSSLESS_RETENTION_FACTOR: f64 = 0.8;

/// Unit ladder for human-readable byte counts (1024-based)
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

// =============================================================================
// Output Naming
// =============================================================================

/// Document file stem used when the caller supplies a blank name
pub const DEFAULT_DOCUMENT_NAME: &str = "converted";

// =============================================================================
// Activity Log
// =============================================================================

/// Maximum number of retained activity entries
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
