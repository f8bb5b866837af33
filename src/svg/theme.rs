//! Color palette for the block diagram.
//!
//! Every value is a literal hex color, baked into the emitted attributes.
//! The rasterizer has no CSS cascade, so indirection through a `<style>`
//! block or custom properties would not survive the export.

use serde::{Deserialize, Serialize};

/// Fill for block bodies, the legend frame and the badge caption.
pub const WHITE: &str = "#ffffff";

/// The named colors the diagram is built from.
///
/// Lane tints and captions are content, not theme, and live with the
/// diagram itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Sensing blocks
    pub sky: String,
    /// Edge AI and decision blocks, and the QA badge
    pub green: String,
    /// Actuation and motion blocks
    pub amber: String,
    /// Connectivity, cloud and UX blocks
    pub indigo: String,
    /// Connectors, arrowheads and their labels
    pub arrow: String,
    /// Block titles
    pub title: String,
    /// Bullet lines inside blocks
    pub body: String,
    /// Border of the legend frame
    pub legend_border: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: "#0ea5e9".to_string(),
            green: "#22c55e".to_string(),
            amber: "#f59e0b".to_string(),
            indigo: "#6366f1".to_string(),
            arrow: "#475569".to_string(),
            title: "#0f172a".to_string(),
            body: "#334155".to_string(),
            legend_border: "#cbd5e1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_literal_hex() {
        let palette = Palette::default();
        for color in [
            &palette.sky,
            &palette.green,
            &palette.amber,
            &palette.indigo,
            &palette.arrow,
            &palette.title,
            &palette.body,
            &palette.legend_border,
        ] {
            assert!(color.starts_with('#') && color.len() == 7, "{}", color);
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{}", color);
        }
    }
}
