//! Single-image compression

use crate::transcode::{RasterSurface, decode_bitmap, encode_image};
use crate::types::*;
use std::path::Path;

/// Compress a single image at the given quality.
///
/// The output keeps the source's native dimensions. The result carries
/// a download-ready file name; the extension is `png` only when the
/// source was PNG and quality is 100, otherwise `jpg`.
pub async fn compress_image(
    source: &SourceImage,
    quality: u8,
    grayscale: bool,
) -> Result<CompressedImage> {
    let bitmap = decode_bitmap(source).await?;
    let mut surface = RasterSurface::new();
    let encoded = encode_image(&mut surface, &bitmap, source.format, quality, grayscale)?;
    let file_name = compressed_file_name(&source.file_name, quality, encoded.format);
    Ok(CompressedImage {
        data: encoded.data,
        format: encoded.format,
        file_name,
    })
}

/// Build the output name `Compressed_<quality>_<stem>.<ext>` from the
/// original file name
pub fn compressed_file_name(original_name: &str, quality: u8, format: OutputFormat) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| original_name.to_string());
    format!("Compressed_{}_{}.{}", quality, stem, format.extension())
}
