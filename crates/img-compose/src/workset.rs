//! The working set of selected images
//!
//! An explicit, ordered collection owning the session's source images.
//! All mutation goes through the owning caller; an in-flight assembly
//! only ever borrows the images, so the set is never changed while a
//! pipeline runs.

use crate::assemble::LoadedImage;
use crate::estimate::estimate_total_size;
use crate::types::*;

/// Ordered collection of source images, preserving selection order
#[derive(Debug, Default)]
pub struct WorkingSet {
    images: Vec<SourceImage>,
    next_id: u64,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image at the end of the set and return its id.
    /// Ids are unique and stable for the session, surviving removals.
    pub fn add(&mut self, image: LoadedImage) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.images.push(SourceImage {
            id,
            file_name: image.file_name,
            format: image.format,
            data: image.data,
        });
        id
    }

    /// Add a batch in order, returning the assigned ids
    pub fn extend(&mut self, images: impl IntoIterator<Item = LoadedImage>) -> Vec<u64> {
        images.into_iter().map(|image| self.add(image)).collect()
    }

    /// Remove an image by id, keeping the relative order of the rest.
    /// Returns the removed image, releasing its bytes to the caller.
    pub fn remove(&mut self, id: u64) -> Option<SourceImage> {
        let index = self.images.iter().position(|image| image.id == id)?;
        Some(self.images.remove(index))
    }

    /// The images in selection order
    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Total raw size of the set in bytes
    pub fn total_bytes(&self) -> u64 {
        self.images.iter().map(SourceImage::byte_len).sum()
    }

    /// Predicted total encoded size at the given quality.
    /// Cheap to call on every quality change and on every add/remove.
    pub fn estimated_bytes(&self, quality: u8) -> Result<f64> {
        estimate_total_size(&self.images, quality)
    }
}
