//! Document assembly - building a paginated document from images
//!
//! This module orchestrates the assembly process:
//! 1. Load raw image files (concurrent reads, joined in input order)
//! 2. Decode, transcode, and lay out each image in input order
//! 3. Serialize the finished artifact to a PDF

mod io;
mod pdf;

pub use io::{LoadedImage, load_images};
pub use pdf::{save_pdf, write_pdf};

use crate::layout::layout_page;
use crate::options::AssemblyOptions;
use crate::transcode::{RasterSurface, decode_bitmap, encode_image};
use crate::types::*;

/// Assemble a document from an ordered list of images, one page per
/// image, preserving input order.
///
/// Each image's decode is an independent suspension point; decode and
/// encode never overlap, so the single rasterization surface is reused
/// safely across pages. Any decode or encode failure aborts the whole
/// assembly with no partial document.
pub async fn assemble(
    images: &[SourceImage],
    options: &AssemblyOptions,
) -> Result<DocumentArtifact> {
    options.validate()?;

    if images.is_empty() {
        return Err(ComposeError::NoInput);
    }

    let (page_width_mm, page_height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);

    let mut surface = RasterSurface::new();
    let mut pages = Vec::with_capacity(images.len());

    for image in images {
        let bitmap = decode_bitmap(image).await?;
        let encoded = encode_image(
            &mut surface,
            &bitmap,
            image.format,
            options.quality,
            options.grayscale,
        )?;
        let geometry = layout_page(
            bitmap.width,
            bitmap.height,
            page_width_mm,
            page_height_mm,
            options.margin_mm,
        )?;
        pages.push(Page {
            data: encoded.data,
            format: encoded.format,
            geometry,
            pixel_width: encoded.width,
            pixel_height: encoded.height,
        });
    }

    Ok(DocumentArtifact {
        pages,
        page_width_mm,
        page_height_mm,
    })
}
