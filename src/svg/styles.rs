//! Styling constants shared by the diagram content and the serializer.
//!
//! Sized for Inter with fallback to system UI fonts.

/// Font stack emitted on every text run
pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Prefix rendered before each bullet line inside a block
pub const BULLET_PREFIX: &str = "\u{2022} ";

/// Dash pattern for feedback connectors
pub const DASH_PATTERN: &str = "6 6";

/// Fixed font sizes used in the diagram (in px)
pub struct FontSizes;

impl FontSizes {
    pub const BLOCK_TITLE: f64 = 14.0;
    pub const BULLET: f64 = 12.0;
    pub const LANE_CAPTION: f64 = 12.0;
    pub const ARROW_LABEL: f64 = 12.0;
    pub const BADGE: f64 = 12.0;
    pub const LEGEND: f64 = 12.0;
}

/// Font weights used per element type
pub struct FontWeights;

impl FontWeights {
    pub const BOLD: u32 = 700;
    pub const REGULAR: u32 = 400;
}

/// Stroke widths per element type (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const BLOCK: f64 = 3.0;
    pub const CONNECTOR: f64 = 2.5;
    pub const LEGEND_FRAME: f64 = 1.0;
}

/// Rounded corner radii per element type (in px)
pub struct CornerRadius;

impl CornerRadius {
    pub const BLOCK: f64 = 16.0;
    pub const LANE: f64 = 12.0;
    pub const LEGEND_FRAME: f64 = 10.0;
}

/// Geometry of the shared arrowhead marker
pub struct ArrowHead;

impl ArrowHead {
    /// Marker viewport, in stroke-width units
    pub const MARKER_SIZE: f64 = 10.0;
    /// Reference point: the tip sits on the line end
    pub const REF_X: f64 = 10.0;
    pub const REF_Y: f64 = 3.0;
    /// Triangle outline inside the marker viewport
    pub const PATH: &'static str = "M0,0 L0,6 L9,3 z";
}
