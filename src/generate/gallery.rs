//! Session-local image gallery.

use crate::model::GeneratedImage;

/// Images generated during this session, newest first.
///
/// Deliberately not part of the global state: the gallery belongs to the
/// generation view and is lost when the session ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    images: Vec<GeneratedImage>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new image at the front.
    pub fn add(&mut self, image: GeneratedImage) {
        self.images.insert(0, image);
    }

    /// Remove an image by id; returns whether anything was removed.
    pub fn remove(&mut self, image_id: &str) -> bool {
        let before = self.images.len();
        self.images.retain(|img| img.id != image_id);
        self.images.len() != before
    }

    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }
}
