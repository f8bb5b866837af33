//! Scene types - the in-memory vector graphic, ready for serialization.

use serde::{Deserialize, Serialize};

/// The vector scene: a declared viewport plus a tree of drawing
/// primitives, rendered in order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

/// A drawing primitive, or a group of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Rect(Rect),
    Line(Line),
    Text(Text),
    Circle(Circle),
    Group(Vec<Node>),
}

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Stroke paint: a literal color plus a width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// An axis-aligned rectangle with optional rounded corners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius, applied to both axes
    #[serde(default)]
    pub rx: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

/// A straight connector segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
    #[serde(default)]
    pub dashed: bool,
    /// Whether the line ends in the shared arrowhead marker
    #[serde(default)]
    pub arrowhead: bool,
}

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Start,
    Middle,
}

/// A single text run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub weight: u32,
    pub fill: String,
    #[serde(default)]
    pub anchor: Anchor,
}

/// A filled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(40, 30);
        scene.push(Node::Group(vec![
            Node::Rect(Rect {
                x: 2.0,
                y: 3.0,
                width: 10.0,
                height: 8.0,
                rx: 2.0,
                fill: Some("#ffffff".to_string()),
                stroke: Some(Stroke {
                    color: "#0ea5e9".to_string(),
                    width: 3.0,
                }),
            }),
            Node::Text(Text {
                x: 4.0,
                y: 7.5,
                content: "pump".to_string(),
                size: 12.0,
                weight: 700,
                fill: "#0f172a".to_string(),
                anchor: Anchor::Start,
            }),
        ]));
        scene.push(Node::Line(Line {
            x1: 12.0,
            y1: 7.0,
            x2: 20.0,
            y2: 7.0,
            stroke: Stroke {
                color: "#475569".to_string(),
                width: 2.5,
            },
            dashed: true,
            arrowhead: true,
        }));
        scene.push(Node::Circle(Circle {
            cx: 30.0,
            cy: 20.0,
            r: 6.0,
            fill: "#22c55e".to_string(),
        }));
        scene
    }

    #[test]
    fn scene_round_trips_through_json() {
        let scene = sample_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let parsed: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r##"{"rect":{"x":1.0,"y":2.0,"width":3.0,"height":4.0,"fill":"#ffffff"}}"##;
        let node: Node = serde_json::from_str(json).unwrap();
        match node {
            Node::Rect(rect) => {
                assert_eq!(rect.rx, 0.0);
                assert!(rect.stroke.is_none());
            }
            other => panic!("expected a rect, got {:?}", other),
        }
    }

    #[test]
    fn anchor_defaults_to_start() {
        assert_eq!(Anchor::default(), Anchor::Start);
    }
}
