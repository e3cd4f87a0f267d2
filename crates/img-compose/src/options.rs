use crate::constants::{DEFAULT_DOCUMENT_NAME, DEFAULT_MARGIN_MM, DEFAULT_PDF_QUALITY};
use crate::estimate::validate_quality;
use crate::types::*;

/// Document assembly configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblyOptions {
    /// Lossy quality percentage in 1..=100
    pub quality: u8,
    /// Convert every page to grayscale before encoding
    pub grayscale: bool,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Uniform page margin in millimeters
    pub margin_mm: f32,
    /// Target document name; blank falls back to a default
    pub file_name: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_PDF_QUALITY,
            grayscale: false,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            file_name: String::new(),
        }
    }
}

impl AssemblyOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::InvalidArgument(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ComposeError::InvalidArgument(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        validate_quality(self.quality)?;

        if self.margin_mm < 0.0 {
            return Err(ComposeError::InvalidArgument(format!(
                "Margin must be non-negative, got {}mm",
                self.margin_mm
            )));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_with_orientation(self.orientation);
        if width_mm - 2.0 * self.margin_mm <= 0.0 || height_mm - 2.0 * self.margin_mm <= 0.0 {
            return Err(ComposeError::InvalidArgument(format!(
                "Margin {}mm leaves no printable area on a {}x{}mm page",
                self.margin_mm, width_mm, height_mm
            )));
        }

        Ok(())
    }

    /// Output file name for the assembled document. A blank or
    /// whitespace-only name falls back to the default stem; a single
    /// `.pdf` extension is guaranteed.
    pub fn document_file_name(&self) -> String {
        let trimmed = self.file_name.trim();
        let stem = if trimmed.is_empty() {
            DEFAULT_DOCUMENT_NAME
        } else {
            trimmed
                .strip_suffix(".pdf")
                .or_else(|| trimmed.strip_suffix(".PDF"))
                .unwrap_or(trimmed)
        };
        format!("{}.pdf", stem)
    }
}
