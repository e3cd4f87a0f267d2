use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("No input images")]
    NoInput,
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Declared format of a source image, as accepted from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
    Other,
}

impl SourceFormat {
    /// Map a declared mime type to a source format
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/jpeg" | "image/jpg" => SourceFormat::Jpeg,
            "image/png" => SourceFormat::Png,
            "image/webp" => SourceFormat::WebP,
            _ => SourceFormat::Other,
        }
    }

    /// Whether the format stores exact pixel values and resists
    /// naive re-encoding
    pub fn is_lossless(self) -> bool {
        matches!(self, SourceFormat::Png)
    }
}

/// Format of an encoded output image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

/// A decoded RGBA pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA, exactly `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ComposeError::InvalidArgument(format!(
                "Bitmap buffer is {} bytes, expected {} for {}x{} RGBA",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// A source image held in the working set: raw file bytes plus the
/// metadata accepted alongside them. Decoding happens in the pipeline;
/// the decoded buffer is released when the page is built.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Unique within the owning working set, stable for the session
    pub id: u64,
    pub file_name: String,
    pub format: SourceFormat,
    pub data: Vec<u8>,
}

impl SourceImage {
    /// Size of the raw file in bytes
    pub fn byte_len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_lossless(&self) -> bool {
        self.format.is_lossless()
    }
}

/// Placement of an image on a page, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl PageGeometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// One finished page of a document artifact
#[derive(Debug, Clone)]
pub struct Page {
    /// Encoded image bytes (JPEG or PNG per `format`)
    pub data: Vec<u8>,
    pub format: OutputFormat,
    pub geometry: PageGeometry,
    /// Native pixel dimensions of the encoded image
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// The assembled document: one page per source image, in input order.
/// Built fresh per assembly request and not mutated afterwards.
#[derive(Debug, Clone)]
pub struct DocumentArtifact {
    pub pages: Vec<Page>,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
}

impl DocumentArtifact {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Result of single-image compression, ready for download handoff
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub data: Vec<u8>,
    pub format: OutputFormat,
    /// Suggested output file name, e.g. `Compressed_80_photo.jpg`
    pub file_name: String,
}
