//! Rasterization: SVG markup to bitmap, bitmap to portable PNG.

use std::sync::Arc;

use lazy_static::lazy_static;
use resvg::tiny_skia::{Color, Pixmap, PixmapPaint, Transform};
use resvg::usvg;

use crate::error::ExportError;

lazy_static! {
    // Scanning system fonts takes tens of milliseconds; one database is
    // shared across exports the way a browser shares its font cache.
    static ref FONTS: Arc<usvg::fontdb::Database> = {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    };
}

/// Decode SVG markup into a bitmap at its intrinsic size.
pub fn decode(data: &[u8]) -> Result<Pixmap, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb = FONTS.clone();

    let tree =
        usvg::Tree::from_data(data, &options).map_err(|e| ExportError::Decode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut bitmap = Pixmap::new(size.width(), size.height()).ok_or(ExportError::Surface {
        width: size.width(),
        height: size.height(),
    })?;
    resvg::render(&tree, Transform::identity(), &mut bitmap.as_mut());

    Ok(bitmap)
}

/// Compose `bitmap` onto an opaque white surface of the given size.
///
/// The draw happens at the origin with no scaling, so a bitmap smaller
/// than the surface leaves white margins and a larger one is clipped.
pub fn compose_on_white(bitmap: &Pixmap, width: u32, height: u32) -> Result<Pixmap, ExportError> {
    let mut surface = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
    surface.fill(Color::from_rgba8(255, 255, 255, 255));
    surface.draw_pixmap(
        0,
        0,
        bitmap.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(surface)
}

/// Encode the surface as PNG bytes.
pub fn encode_png(surface: &Pixmap) -> Result<Vec<u8>, ExportError> {
    surface
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))
}
