//! Grayscale conversion
//!
//! RGBA-to-grayscale using the ITU-R BT.601 luminance weights. The
//! caller's buffer is never mutated; a new buffer is returned.

use crate::types::*;

/// Convert an RGBA buffer to grayscale, leaving alpha untouched.
///
/// Every pixel becomes `R = G = B = round(0.299*R + 0.587*G + 0.114*B)`.
/// Applying the transform twice yields the same buffer as applying it
/// once. The buffer must be exactly `width * height * 4` bytes.
pub fn to_grayscale(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(ComposeError::InvalidArgument(format!(
            "Pixel buffer is {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            expected,
            width,
            height
        )));
    }

    let mut out = Vec::with_capacity(pixels.len());
    for px in pixels.chunks_exact(4) {
        let luma = 0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
        let luma = luma.round() as u8;
        out.extend_from_slice(&[luma, luma, luma, px[3]]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        // Pure red, green, and blue pixels; green carries the largest weight.
        let pixels = [255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255];
        let gray = to_grayscale(&pixels, 3, 1).unwrap();

        assert_eq!(gray[0], 76); // round(0.299 * 255)
        assert_eq!(gray[4], 150); // round(0.587 * 255)
        assert_eq!(gray[8], 29); // round(0.114 * 255)

        for px in gray.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let pixels = [10, 200, 30, 0, 90, 14, 220, 128, 1, 2, 3, 255];
        let gray = to_grayscale(&pixels, 3, 1).unwrap();

        assert_eq!(gray.len(), pixels.len());
        assert_eq!(gray[3], 0);
        assert_eq!(gray[7], 128);
        assert_eq!(gray[11], 255);
    }

    #[test]
    fn test_idempotent() {
        let pixels: Vec<u8> = (0..64u32)
            .flat_map(|i| [(i * 3) as u8, (i * 7) as u8, (i * 13) as u8, 255])
            .collect();
        let once = to_grayscale(&pixels, 8, 8).unwrap();
        let twice = to_grayscale(&once, 8, 8).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_buffer_untouched() {
        let pixels = vec![200u8, 100, 50, 255];
        let copy = pixels.clone();
        to_grayscale(&pixels, 1, 1).unwrap();
        assert_eq!(pixels, copy);
    }

    #[test]
    fn test_malformed_buffer_rejected() {
        let result = to_grayscale(&[0, 0, 0], 1, 1);
        assert!(matches!(result, Err(ComposeError::InvalidArgument(_))));

        let result = to_grayscale(&[0; 8], 3, 1);
        assert!(matches!(result, Err(ComposeError::InvalidArgument(_))));
    }
}
