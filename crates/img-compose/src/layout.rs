//! Page layout planning
//!
//! Computes where an image lands on a page: fit to the printable area
//! preserving aspect ratio, then centered on the page.

use crate::types::*;

/// Calculate the placement of an image on a page.
///
/// The printable area is the page minus the margin on all four sides.
/// The fit is width-first: the image takes the full printable width and
/// falls back to the printable height when the derived height overflows,
/// so portrait images on a portrait page are height-constrained. The
/// result is centered on the page and keeps the image's pixel aspect
/// ratio.
///
/// All page values are millimeters; any page size and margin are
/// accepted as long as the printable area stays positive.
pub fn layout_page(
    image_width_px: u32,
    image_height_px: u32,
    page_width_mm: f32,
    page_height_mm: f32,
    margin_mm: f32,
) -> Result<PageGeometry> {
    if image_width_px == 0 || image_height_px == 0 {
        return Err(ComposeError::InvalidArgument(format!(
            "Image dimensions must be non-zero, got {}x{}",
            image_width_px, image_height_px
        )));
    }

    let printable_width = page_width_mm - 2.0 * margin_mm;
    let printable_height = page_height_mm - 2.0 * margin_mm;
    if printable_width <= 0.0 || printable_height <= 0.0 {
        return Err(ComposeError::InvalidArgument(format!(
            "Margin {}mm leaves no printable area on a {}x{}mm page",
            margin_mm, page_width_mm, page_height_mm
        )));
    }

    let aspect_ratio = image_width_px as f32 / image_height_px as f32;

    let mut width = printable_width;
    let mut height = width / aspect_ratio;
    if height > printable_height {
        height = printable_height;
        width = height * aspect_ratio;
    }

    let x = (page_width_mm - width) / 2.0;
    let y = (page_height_mm - height) / 2.0;

    Ok(PageGeometry::new(x, y, width, height))
}
