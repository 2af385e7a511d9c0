//! Scene documents: serialize, deserialize, save/load and export.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use pixelkit_core::ExportFormat;
use serde::{Deserialize, Serialize};

use super::Scene;
use crate::error::{SceneError, SceneResult};
use crate::image_store::ImageStore;
use crate::model::{DrawingObject, Shape};

/// Persisted scene: canvas size plus one record per shape.
///
/// Shape records are kept as raw JSON so that a malformed record can be
/// skipped without rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub shapes: Vec<serde_json::Value>,
    #[serde(default, rename = "savedAt", skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Outcome of loading a scene document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Shapes now in the scene.
    pub loaded: usize,
    /// Records dropped as malformed or duplicate.
    pub skipped: usize,
    /// Image ids whose pixels could not be resolved; those shapes draw nothing.
    pub unresolved_images: Vec<String>,
}

impl Scene {
    /// Snapshot of the scene as a document.
    pub fn serialize(&self) -> SceneResult<SceneDocument> {
        let shapes = self
            .shapes
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SceneDocument {
            width: self.width,
            height: self.height,
            shapes,
            saved_at: None,
        })
    }

    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(&self.serialize()?)?)
    }

    /// Parses `json` and replaces the scene's shapes with its records.
    pub async fn deserialize(
        &mut self,
        json: &str,
        store: &dyn ImageStore,
    ) -> SceneResult<LoadReport> {
        let doc: SceneDocument = serde_json::from_str(json)?;
        self.load_document(doc, store).await
    }

    /// Replaces the scene's shapes with the document's records.
    ///
    /// A size mismatch rejects the document and leaves the scene untouched.
    /// Malformed or duplicate records are skipped. Image pixels are resolved
    /// through `store`; failures are logged and reported, and the shape is
    /// kept but draws nothing. History restarts from the loaded state.
    pub async fn load_document(
        &mut self,
        doc: SceneDocument,
        store: &dyn ImageStore,
    ) -> SceneResult<LoadReport> {
        if doc.width != self.width || doc.height != self.height {
            return Err(SceneError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: doc.width,
                height: doc.height,
            });
        }

        let mut report = LoadReport::default();
        let mut shapes: Vec<DrawingObject> = Vec::with_capacity(doc.shapes.len());
        for (i, record) in doc.shapes.into_iter().enumerate() {
            let obj: DrawingObject = match serde_json::from_value(record) {
                Ok(obj) => obj,
                Err(e) => {
                    tracing::debug!("Skipping shape record {}: {}", i, e);
                    report.skipped += 1;
                    continue;
                }
            };
            if shapes.iter().any(|s| s.id == obj.id) {
                tracing::debug!("Skipping shape record {}: duplicate id {}", i, obj.id);
                report.skipped += 1;
                continue;
            }
            shapes.push(obj);
        }

        for obj in &mut shapes {
            let Shape::Image(image) = &mut obj.shape else {
                continue;
            };
            match store.get_image_bytes(&image.image_id).await {
                Ok(source) => image.attach_source(source),
                Err(e) => {
                    tracing::warn!("Could not resolve image '{}': {}", image.image_id, e);
                    report.unresolved_images.push(image.image_id.clone());
                }
            }
        }

        report.loaded = shapes.len();
        self.shapes = shapes;
        self.enforce_single_selection();
        self.history.reset(&self.shapes);

        tracing::info!(
            "Loaded scene {}x{}: {} shapes, {} skipped, {} unresolved images",
            self.width,
            self.height,
            report.loaded,
            report.skipped,
            report.unresolved_images.len()
        );
        Ok(report)
    }

    /// Writes the scene document as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let mut doc = self.serialize()?;
        doc.saved_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&doc).context("Failed to serialize scene")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write scene file: {}", path.display()))?;

        tracing::info!("Saved scene to {}", path.display());
        Ok(())
    }

    /// Reads a scene document from disk and loads it.
    pub async fn load_from_file(
        &mut self,
        path: impl AsRef<Path>,
        store: &dyn ImageStore,
    ) -> anyhow::Result<LoadReport> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        let report = self
            .deserialize(&json, store)
            .await
            .with_context(|| format!("Failed to load scene: {}", path.display()))?;
        Ok(report)
    }

    /// Renders the scene and encodes the buffer.
    pub fn export(&mut self, format: ExportFormat) -> SceneResult<Vec<u8>> {
        Ok(self.render().encode(format)?)
    }
}
