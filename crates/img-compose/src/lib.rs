pub mod assemble;
mod compress;
mod constants;
mod estimate;
mod grayscale;
mod history;
mod layout;
mod options;
mod transcode;
mod types;
mod workset;

pub use assemble::{LoadedImage, assemble, load_images, save_pdf, write_pdf};
pub use compress::{compress_image, compressed_file_name};
pub use constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_MARGIN_MM, DEFAULT_PDF_QUALITY, GRAYSCALE_JPEG_QUALITY,
    mm_to_pt, pt_to_mm,
};
pub use estimate::{estimate_size, estimate_total_size, format_byte_size};
pub use grayscale::to_grayscale;
pub use history::{ActivityEntry, ActivityKind, ActivityLog};
pub use layout::layout_page;
pub use options::AssemblyOptions;
pub use transcode::{EncodedImage, RasterSurface, encode_image, output_format_for};
pub use types::*;
pub use workset::WorkingSet;
