//! Image store collaborator.
//!
//! Image shapes persist only an opaque `imageId`; the decoded pixels live in
//! an [`ImageStore`] and are resolved asynchronously while a scene loads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use pixelkit_core::RawImage;

use crate::error::ImageStoreError;

/// Source of raw image pixels, keyed by image id.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Fetches the decoded RGBA pixels for `id`.
    async fn get_image_bytes(&self, id: &str) -> Result<Arc<RawImage>, ImageStoreError>;
}

/// In-memory store, cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    images: Arc<RwLock<HashMap<String, Arc<RawImage>>>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: impl Into<String>, image: RawImage) {
        self.images.write().insert(id.into(), Arc::new(image));
    }

    pub fn remove(&self, id: &str) -> Option<Arc<RawImage>> {
        self.images.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.images.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn get_image_bytes(&self, id: &str) -> Result<Arc<RawImage>, ImageStoreError> {
        self.images
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ImageStoreError::NotFound(id.to_string()))
    }
}

/// Store backed by image files in one directory.
///
/// An id resolves to `<root>/<id>`, falling back to `<root>/<id>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryImageStore {
    root: PathBuf,
}

impl DirectoryImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, id: &str) -> Result<[PathBuf; 2], ImageStoreError> {
        let invalid = id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\'])
            || Path::new(id).is_absolute();
        if invalid {
            return Err(ImageStoreError::InvalidId(id.to_string()));
        }
        Ok([self.root.join(id), self.root.join(format!("{id}.png"))])
    }
}

#[async_trait]
impl ImageStore for DirectoryImageStore {
    async fn get_image_bytes(&self, id: &str) -> Result<Arc<RawImage>, ImageStoreError> {
        for path in self.candidates(id)? {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let decoded = image::load_from_memory(&bytes)?.to_rgba8();
            tracing::debug!(
                "Decoded image '{}' ({}x{}) from {}",
                id,
                decoded.width(),
                decoded.height(),
                path.display()
            );
            return Ok(Arc::new(RawImage::from_rgba_image(decoded)));
        }
        Err(ImageStoreError::NotFound(id.to_string()))
    }
}
