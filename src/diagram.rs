//! The Intelligent Pesticide Sprinkling System block diagram.
//!
//! Four horizontal lanes (sensing, edge AI, actuation, connectivity),
//! thirteen titled blocks with bullet copy, eighteen labeled connectors,
//! a post-spray QA badge and a color legend, all placed by literal
//! coordinates on a fixed 1200x900 viewport.

use crate::scene::{Anchor, Circle, Line, Node, Point, Rect, Scene, Stroke, Text};
use crate::svg::styles::{BULLET_PREFIX, CornerRadius, FontSizes, FontWeights, StrokeWidths};
use crate::svg::{Palette, WHITE};

/// Width of the diagram viewport, in px
pub const VIEWPORT_WIDTH: u32 = 1200;
/// Height of the diagram viewport, in px
pub const VIEWPORT_HEIGHT: u32 = 900;

/// The display layer: owns the scene once it has been rendered.
#[derive(Debug, Default)]
pub struct Diagram {
    scene: Option<Scene>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the scene on first call; later calls return the cached one.
    pub fn render(&mut self) -> &Scene {
        self.scene
            .get_or_insert_with(|| build_scene(&Palette::default()))
    }

    /// The rendered scene, or `None` if `render` has not run yet.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

/// Assemble the full scene from literal geometry and copy.
pub fn build_scene(palette: &Palette) -> Scene {
    let mut scene = Scene::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    // Lane bands behind everything else. Tints and caption colors are
    // per-lane content rather than palette entries.
    let mut lanes = Vec::new();
    lanes.extend(lane(70.0, 150.0, "#f0f9ff", "Sensing", "#0369a1"));
    lanes.extend(lane(240.0, 150.0, "#f0fdf4", "Edge AI & Decision", "#166534"));
    lanes.extend(lane(410.0, 200.0, "#fff7ed", "Actuation & Motion", "#9a3412"));
    lanes.extend(lane(630.0, 180.0, "#eef2ff", "Connectivity, Cloud & UX", "#3730a3"));
    scene.push(Node::Group(lanes));

    // Sensing layer
    scene.push(block(
        palette,
        40.0,
        100.0,
        260.0,
        110.0,
        "Vision Module (Camera/Drone)",
        &palette.sky,
        &[
            "RGB camera, optional NIR",
            "Leaf spot/lesion detection",
            "Edge deployable (TFLite)",
        ],
    ));
    scene.push(block(
        palette,
        330.0,
        100.0,
        240.0,
        110.0,
        "Env/Plant Sensors",
        &palette.sky,
        &[
            "Leaf-wetness, temp, RH",
            "Soil moisture, EC",
            "NDVI/Color index",
        ],
    ));
    scene.push(block(
        palette,
        590.0,
        100.0,
        240.0,
        110.0,
        "Positioning",
        &palette.sky,
        &[
            "GPS/RTK or wheel encoder",
            "Row/plant localization",
            "Spray geo-tagging",
        ],
    ));
    scene.push(block(
        palette,
        850.0,
        100.0,
        300.0,
        110.0,
        "Safety & Compliance",
        &palette.sky,
        &[
            "Tank level, pressure sensor",
            "Wind speed (drift control)",
            "Nozzle temp/current sensing",
        ],
    ));

    // Edge AI & decision layer
    scene.push(block(
        palette,
        60.0,
        270.0,
        320.0,
        110.0,
        "Edge Compute",
        &palette.green,
        &[
            "MCU/SoC: ESP32/RPi/Jetson Nano",
            "On-device AI: TFLite/OpenCV",
            "Pre-processing & denoise",
        ],
    ));
    scene.push(block(
        palette,
        410.0,
        270.0,
        350.0,
        110.0,
        "Disease & Severity Model",
        &palette.green,
        &[
            "Binary: Healthy/Unhealthy",
            "Multi-class: Mild/Mod/Severe",
            "Confidence & uncertainty",
        ],
    ));
    scene.push(block(
        palette,
        790.0,
        270.0,
        360.0,
        110.0,
        "Dosing & Coverage Engine",
        &palette.green,
        &[
            "Dose map per plant/leaf",
            "PWM pump control profile",
            "Skip healthy \u{2192} save chemical",
        ],
    ));

    // Actuation & motion layer
    scene.push(block(
        palette,
        60.0,
        450.0,
        330.0,
        130.0,
        "Spray Subsystem",
        &palette.amber,
        &[
            "Pump + solenoid valves",
            "Nozzles (swirl/flat-fan)",
            "Flow sensor for closed-loop",
        ],
    ));
    scene.push(block(
        palette,
        420.0,
        450.0,
        330.0,
        130.0,
        "Aiming & Distribution",
        &palette.amber,
        &[
            "2\u{2013}4 servo pan/tilt arm",
            "Height control",
            "Row/plant indexing",
        ],
    ));
    scene.push(block(
        palette,
        780.0,
        450.0,
        330.0,
        130.0,
        "Mobility Platform",
        &palette.amber,
        &[
            "Tractor boom / UGV / Drone",
            "Obstacle detection (ultrasonic)",
            "Emergency stop & manual override",
        ],
    ));

    // Connectivity, cloud & UX layer
    scene.push(block(
        palette,
        60.0,
        670.0,
        360.0,
        120.0,
        "Comms",
        &palette.indigo,
        &[
            "LoRa/Wi\u{2011}Fi/4G",
            "MQTT/HTTPS",
            "Over\u{2011}the\u{2011}air updates (OTA)",
        ],
    ));
    scene.push(block(
        palette,
        440.0,
        670.0,
        330.0,
        120.0,
        "Farmer Dashboard (App/Web)",
        &palette.indigo,
        &[
            "Live infection map",
            "Chemical used & \u{20b9} saved",
            "Alerts & audit logs",
        ],
    ));
    scene.push(block(
        palette,
        790.0,
        670.0,
        320.0,
        120.0,
        "Data Lake & Analytics",
        &palette.indigo,
        &[
            "Per\u{2011}plant history",
            "Model retraining",
            "Compliance reports",
        ],
    ));

    // Forward flow between sensing blocks, then down into the edge layer
    scene.push(arrow(palette, pt(300.0, 155.0), pt(330.0, 155.0), Some("sensor fusion"), false));
    scene.push(arrow(palette, pt(570.0, 155.0), pt(590.0, 155.0), None, false));
    scene.push(arrow(palette, pt(830.0, 155.0), pt(850.0, 155.0), None, false));

    scene.push(arrow(palette, pt(200.0, 210.0), pt(220.0, 270.0), Some("frames + features"), false));
    scene.push(arrow(palette, pt(450.0, 210.0), pt(510.0, 270.0), Some("telemetry"), false));
    scene.push(arrow(palette, pt(700.0, 210.0), pt(840.0, 270.0), Some("pose/geo"), false));

    scene.push(arrow(palette, pt(380.0, 325.0), pt(410.0, 325.0), None, false));
    scene.push(arrow(palette, pt(760.0, 325.0), pt(790.0, 325.0), Some("severity \u{2192} dose"), false));

    // Feedback within the actuation lane
    scene.push(arrow(palette, pt(420.0, 515.0), pt(390.0, 515.0), Some("closed loop"), true));
    scene.push(arrow(palette, pt(750.0, 515.0), pt(750.0, 380.0), Some("motion state"), true));
    scene.push(arrow(palette, pt(960.0, 580.0), pt(960.0, 670.0), Some("util & logs"), false));

    // Decision outputs into the actuators
    scene.push(arrow(palette, pt(970.0, 325.0), pt(900.0, 450.0), Some("spray plan"), false));
    scene.push(arrow(palette, pt(735.0, 325.0), pt(585.0, 450.0), Some("aim setpoints"), false));
    scene.push(arrow(palette, pt(540.0, 325.0), pt(230.0, 450.0), Some("pump profile"), false));

    // Reporting down to the connectivity lane
    scene.push(arrow(palette, pt(220.0, 580.0), pt(220.0, 670.0), Some("counts, ml used"), false));
    scene.push(arrow(palette, pt(620.0, 580.0), pt(620.0, 670.0), Some("KPIs"), false));

    scene.push(arrow(palette, pt(770.0, 730.0), pt(770.0, 380.0), Some("model updates"), true));

    // Post-spray QA badge and its verification loop back to sensing
    scene.push(Node::Group(vec![
        Node::Circle(Circle {
            cx: 1040.0,
            cy: 365.0,
            r: 16.0,
            fill: palette.green.clone(),
        }),
        Node::Text(Text {
            x: 1040.0,
            y: 370.0,
            content: "QA".to_string(),
            size: FontSizes::BADGE,
            weight: FontWeights::REGULAR,
            fill: WHITE.to_string(),
            anchor: Anchor::Middle,
        }),
    ]));
    scene.push(arrow(palette, pt(1040.0, 365.0), pt(1040.0, 210.0), Some("post-spray verify"), true));

    scene.push(legend(palette));

    scene
}

const fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

/// A full-width lane band with its caption.
fn lane(y: f64, height: f64, fill: &str, caption: &str, caption_color: &str) -> Vec<Node> {
    vec![
        Node::Rect(Rect {
            x: 20.0,
            y,
            width: 1160.0,
            height,
            rx: CornerRadius::LANE,
            fill: Some(fill.to_string()),
            stroke: None,
        }),
        Node::Text(Text {
            x: 30.0,
            y: y + 20.0,
            content: caption.to_string(),
            size: FontSizes::LANE_CAPTION,
            weight: FontWeights::BOLD,
            fill: caption_color.to_string(),
            anchor: Anchor::Start,
        }),
    ]
}

/// A titled block: white body, colored border, bulleted copy.
fn block(
    palette: &Palette,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    title: &str,
    color: &str,
    lines: &[&str],
) -> Node {
    let mut children = vec![
        Node::Rect(Rect {
            x,
            y,
            width,
            height,
            rx: CornerRadius::BLOCK,
            fill: Some(WHITE.to_string()),
            stroke: Some(Stroke {
                color: color.to_string(),
                width: StrokeWidths::BLOCK,
            }),
        }),
        Node::Text(Text {
            x: x + 16.0,
            y: y + 28.0,
            content: title.to_string(),
            size: FontSizes::BLOCK_TITLE,
            weight: FontWeights::BOLD,
            fill: palette.title.clone(),
            anchor: Anchor::Start,
        }),
    ];
    for (i, line) in lines.iter().enumerate() {
        children.push(Node::Text(Text {
            x: x + 16.0,
            y: y + 52.0 + i as f64 * 18.0,
            content: format!("{}{}", BULLET_PREFIX, line),
            size: FontSizes::BULLET,
            weight: FontWeights::REGULAR,
            fill: palette.body.clone(),
            anchor: Anchor::Start,
        }));
    }
    Node::Group(children)
}

/// A connector ending in the shared arrowhead, with an optional label
/// floating above its midpoint.
fn arrow(palette: &Palette, from: Point, to: Point, label: Option<&str>, dashed: bool) -> Node {
    let mut children = vec![Node::Line(Line {
        x1: from.x,
        y1: from.y,
        x2: to.x,
        y2: to.y,
        stroke: Stroke {
            color: palette.arrow.clone(),
            width: StrokeWidths::CONNECTOR,
        },
        dashed,
        arrowhead: true,
    })];
    if let Some(label) = label {
        children.push(Node::Text(Text {
            x: (from.x + to.x) / 2.0,
            y: (from.y + to.y) / 2.0 - 8.0,
            content: label.to_string(),
            size: FontSizes::ARROW_LABEL,
            weight: FontWeights::REGULAR,
            fill: palette.arrow.clone(),
            anchor: Anchor::Middle,
        }));
    }
    Node::Group(children)
}

/// The color legend in the bottom-right corner.
fn legend(palette: &Palette) -> Node {
    let mut children = vec![Node::Rect(Rect {
        x: 880.0,
        y: 825.0,
        width: 300.0,
        height: 60.0,
        rx: CornerRadius::LEGEND_FRAME,
        fill: Some(WHITE.to_string()),
        stroke: Some(Stroke {
            color: palette.legend_border.clone(),
            width: StrokeWidths::LEGEND_FRAME,
        }),
    })];
    for (cx, cy, color, label) in [
        (900.0, 845.0, &palette.sky, "Sensing blocks"),
        (900.0, 865.0, &palette.green, "Edge AI & decision"),
        (1040.0, 845.0, &palette.amber, "Actuation & motion"),
        (1040.0, 865.0, &palette.indigo, "Cloud, comms & UX"),
    ] {
        children.push(Node::Circle(Circle {
            cx,
            cy,
            r: 6.0,
            fill: color.clone(),
        }));
        children.push(Node::Text(Text {
            x: cx + 15.0,
            y: cy + 4.0,
            content: label.to_string(),
            size: FontSizes::LEGEND,
            weight: FontWeights::REGULAR,
            fill: "#000000".to_string(),
            anchor: Anchor::Start,
        }));
    }
    Node::Group(children)
}
