//! Image transcoding
//!
//! Re-encodes a decoded bitmap under the output-format policy:
//! - grayscale requested: luminance transform, then JPEG at a fixed
//!   quality of 90 for consistent document export, regardless of the
//!   requested quality
//! - PNG source at quality 100: preserved losslessly as PNG
//! - everything else: JPEG at the requested quality
//!
//! Lossy encoding goes through a reusable rasterization surface that is
//! reset and sized to the image's native dimensions before each use.
//! No resizing or cropping occurs.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::constants::GRAYSCALE_JPEG_QUALITY;
use crate::estimate::validate_quality;
use crate::grayscale::to_grayscale;
use crate::types::*;

/// An encoded image plus the format the policy selected for it
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

/// Decide the output format for a source format and quality setting.
/// PNG input at full quality is the only lossless combination.
pub fn output_format_for(source: SourceFormat, quality: u8) -> OutputFormat {
    if source == SourceFormat::Png && quality == 100 {
        OutputFormat::Png
    } else {
        OutputFormat::Jpeg
    }
}

/// Reusable RGB working surface for lossy encoding.
///
/// One surface serves a whole assembly run: it is resized to each
/// image's native dimensions and reset to white before the bitmap is
/// composited onto it, so state never leaks between pages.
#[derive(Debug, Default)]
pub struct RasterSurface {
    rgb: Vec<u8>,
}

impl RasterSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite an RGBA bitmap over a white background at native size,
    /// returning the flattened RGB pixels.
    fn rasterize(&mut self, bitmap: &Bitmap) -> &[u8] {
        let len = bitmap.width as usize * bitmap.height as usize * 3;
        self.rgb.clear();
        self.rgb.resize(len, 0xFF);

        for (src, dst) in bitmap
            .pixels
            .chunks_exact(4)
            .zip(self.rgb.chunks_exact_mut(3))
        {
            let alpha = u32::from(src[3]);
            for channel in 0..3 {
                let blended = (u32::from(src[channel]) * alpha + 0xFF * (255 - alpha)) / 255;
                dst[channel] = blended as u8;
            }
        }
        &self.rgb
    }
}

/// Re-encode a decoded bitmap.
///
/// `quality` must be in 1..=100. Corrupt pixel buffers fail with
/// `InvalidArgument`; encoder failures surface as `Encode` and abort
/// the caller's whole operation.
pub fn encode_image(
    surface: &mut RasterSurface,
    bitmap: &Bitmap,
    source_format: SourceFormat,
    quality: u8,
    grayscale: bool,
) -> Result<EncodedImage> {
    validate_quality(quality)?;

    if grayscale {
        let gray = to_grayscale(&bitmap.pixels, bitmap.width, bitmap.height)?;
        let gray = Bitmap::new(bitmap.width, bitmap.height, gray)?;
        let rgb = surface.rasterize(&gray);
        let data = encode_jpeg(rgb, gray.width, gray.height, GRAYSCALE_JPEG_QUALITY)?;
        return Ok(EncodedImage {
            data,
            format: OutputFormat::Jpeg,
            width: gray.width,
            height: gray.height,
        });
    }

    match output_format_for(source_format, quality) {
        OutputFormat::Png => {
            let data = encode_png(bitmap)?;
            Ok(EncodedImage {
                data,
                format: OutputFormat::Png,
                width: bitmap.width,
                height: bitmap.height,
            })
        }
        OutputFormat::Jpeg => {
            let rgb = surface.rasterize(bitmap);
            let data = encode_jpeg(rgb, bitmap.width, bitmap.height, quality)?;
            Ok(EncodedImage {
                data,
                format: OutputFormat::Jpeg,
                width: bitmap.width,
                height: bitmap.height,
            })
        }
    }
}

/// Decode a source image to an RGBA bitmap on the blocking pool.
/// This is the pipeline's suspension point: each image becomes
/// available independently.
pub(crate) async fn decode_bitmap(source: &SourceImage) -> Result<Bitmap> {
    let data = source.data.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&data).map(|img| {
            let rgba = img.to_rgba8();
            (rgba.width(), rgba.height(), rgba.into_raw())
        })
    })
    .await?;

    let (width, height, pixels) = decoded.map_err(|e| ComposeError::Decode(e.to_string()))?;
    Bitmap::new(width, height, pixels)
}

fn encode_jpeg(rgb: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, quality)
        .encode(rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ComposeError::Encode(e.to_string()))?;
    Ok(data)
}

fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    PngEncoder::new(&mut data)
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ComposeError::Encode(e.to_string()))?;
    Ok(data)
}
