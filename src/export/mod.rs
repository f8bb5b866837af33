//! The PNG export pipeline.
//!
//! Mirrors what a browser does when the page offers its "Download as PNG"
//! button: serialize the live SVG, park it behind an object URL, decode it
//! into a bitmap, draw that over an opaque white canvas of the declared
//! viewport size, encode the canvas as PNG, park the PNG behind a second
//! object URL, save it under a fixed filename, and revoke both URLs.

mod blob;
mod raster;

pub use blob::{Blob, BlobStore, BlobUrl, ScopedUrl};

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;

use crate::error::ExportError;
use crate::scene::Scene;
use crate::svg::{render_svg, Palette};

/// Every export saves under this exact name; a later export overwrites an
/// earlier one, the way repeated browser downloads of the same file would
/// collide.
pub const DOWNLOAD_FILENAME: &str = "Intelligent_Pesticide_System_Block_Diagram.png";

/// Media type attached to the serialized scene blob.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml;charset=utf-8";
/// Media type attached to the encoded raster blob.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Converts a rendered vector scene into a PNG file on disk.
pub struct Exporter {
    store: Arc<BlobStore>,
    download_dir: PathBuf,
}

impl Exporter {
    /// An exporter that saves into `download_dir`, sharing the process-wide
    /// URL registry.
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(BlobStore::shared(), download_dir)
    }

    /// An exporter with a private URL registry.
    pub fn with_store(store: Arc<BlobStore>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            download_dir: download_dir.into(),
        }
    }

    /// Export `scene` as a PNG and return the saved path.
    ///
    /// Handing in `None` (the diagram was never rendered) is a silent
    /// no-op: `Ok(None)`, no registry entries, no file. Both object URLs
    /// minted along the way are revoked on every exit path, errors
    /// included. Concurrent exports do not disturb each other, but they
    /// race to write the same fixed filename; the last writer wins.
    pub async fn export(&self, scene: Option<&Scene>) -> Result<Option<PathBuf>, ExportError> {
        let Some(scene) = scene else {
            log::debug!("export requested before the diagram was rendered, ignoring");
            return Ok(None);
        };

        let markup = render_svg(scene, &Palette::default());
        let svg_url = ScopedUrl::create(&self.store, Blob::new(markup.into_bytes(), SVG_MEDIA_TYPE));
        log::debug!("serialized scene parked at {}", svg_url.url());

        // The decode and encode legs run on blocking tasks; those two
        // awaits are the pipeline's only suspension points.
        let svg_blob = self
            .store
            .resolve(svg_url.url())
            .ok_or_else(|| ExportError::Dangling(svg_url.url().to_string()))?;
        let bitmap = task::spawn_blocking(move || raster::decode(svg_blob.data()))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;

        let surface = raster::compose_on_white(&bitmap, scene.width, scene.height)?;

        let png = task::spawn_blocking(move || raster::encode_png(&surface))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;

        let png_url = ScopedUrl::create(&self.store, Blob::new(png, PNG_MEDIA_TYPE));
        let path = self.download(png_url.url())?;
        log::info!("saved {}", path.display());

        Ok(Some(path))
        // Both ScopedUrl guards revoke their registry entries here.
    }

    /// Resolve a blob URL and write its bytes under the fixed filename.
    fn download(&self, url: &BlobUrl) -> Result<PathBuf, ExportError> {
        let blob = self
            .store
            .resolve(url)
            .ok_or_else(|| ExportError::Dangling(url.to_string()))?;
        let path = self.download_dir.join(DOWNLOAD_FILENAME);
        fs::write(&path, blob.data())?;
        Ok(path)
    }
}
