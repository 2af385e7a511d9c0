use std::path::PathBuf;

use anyhow::Context;
use pixelkit::{init_logging, DirectoryImageStore, EditorSettings, Scene};

const USAGE: &str = "usage: pixelkit <scene.json> <output> [images_dir]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let (Some(scene_path), Some(output)) = (args.next(), args.next()) else {
        anyhow::bail!(USAGE);
    };
    let images_dir = args.next().unwrap_or_else(|| ".".to_string());

    let settings = match EditorSettings::default_config_path() {
        Ok(path) => EditorSettings::load_or_default(&path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        Err(e) => {
            tracing::warn!("No config directory, using default settings: {}", e);
            EditorSettings::default()
        }
    };

    tracing::info!(
        "pixelkit {} (built {}), canvas {}x{}",
        pixelkit::VERSION,
        pixelkit::BUILD_DATE,
        settings.canvas.width,
        settings.canvas.height
    );

    let mut scene = Scene::with_settings(&settings);
    let store = DirectoryImageStore::new(PathBuf::from(images_dir));
    let report = scene.load_from_file(&scene_path, &store).await?;
    if !report.unresolved_images.is_empty() {
        tracing::warn!("Unresolved images: {}", report.unresolved_images.join(", "));
    }

    let bytes = scene
        .export(settings.export.to_export_format())
        .context("Failed to export scene")?;
    std::fs::write(&output, bytes)
        .with_context(|| format!("Failed to write output: {}", output))?;

    tracing::info!("Wrote {} ({})", output, settings.export.format);
    Ok(())
}
