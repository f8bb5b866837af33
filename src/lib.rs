//! ipss-diagram - the Intelligent Pesticide Sprinkling System block
//! diagram, rendered as SVG, with a PNG export pipeline.
//!
//! The diagram is static content: four lanes, thirteen blocks, eighteen
//! connectors, a QA badge and a legend, all on a fixed 1200x900 viewport.
//! The moving part is the exporter, which serializes the scene to SVG,
//! decodes it into a bitmap, composes it onto an opaque white surface and
//! saves the PNG under a fixed download name.
//!
//! # Example
//!
//! ```rust
//! use ipss_diagram::{render_to_svg, Diagram};
//!
//! let mut diagram = Diagram::new();
//! let scene = diagram.render();
//! let svg = render_to_svg(scene);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod diagram;
pub mod error;
pub mod export;
pub mod scene;
pub mod svg;

pub use diagram::{Diagram, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use error::ExportError;
pub use export::{Exporter, DOWNLOAD_FILENAME};
pub use scene::Scene;
pub use svg::Palette;

/// Serialize a rendered scene to SVG markup with the default palette.
pub fn render_to_svg(scene: &Scene) -> String {
    svg::render_svg(scene, &Palette::default())
}
