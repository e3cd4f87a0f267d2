//! Image file I/O for assembly

use crate::types::*;
use std::path::Path;

/// A raw image file read into memory, before any pixel work
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file_name: String,
    pub format: SourceFormat,
    pub data: Vec<u8>,
}

/// Read multiple image files concurrently.
///
/// Every read is issued as an independent task, then joined in input
/// order: the returned list always matches the order of `paths`, never
/// the order in which reads happen to complete. Nothing downstream
/// starts until every file is resident.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<LoadedImage>> {
    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref().to_owned();
        tasks.push(tokio::spawn(async move {
            let data = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let format = detect_format(&data);
            Ok::<_, ComposeError>(LoadedImage {
                file_name,
                format,
                data,
            })
        }));
    }

    let mut images = Vec::with_capacity(tasks.len());
    for task in tasks {
        images.push(task.await??);
    }
    Ok(images)
}

/// Classify raw bytes by their magic numbers
fn detect_format(data: &[u8]) -> SourceFormat {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Jpeg) => SourceFormat::Jpeg,
        Ok(image::ImageFormat::Png) => SourceFormat::Png,
        Ok(image::ImageFormat::WebP) => SourceFormat::WebP,
        _ => SourceFormat::Other,
    }
}
