//! SVG serializer - converts a Scene into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Primitives are emitted in scene order, back to front.

use super::styles::{ArrowHead, DASH_PATTERN, FONT_FAMILY};
use super::theme::Palette;
use crate::scene::{Anchor, Circle, Line, Node, Rect, Scene, Text};

/// Serialize a scene as a standalone SVG document.
///
/// The palette only contributes the arrowhead fill; every other color is
/// already baked into the scene's primitives.
pub fn render_svg(scene: &Scene, palette: &Palette) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(scene.width, scene.height));
    parts.push("<defs>".to_string());
    parts.push(arrow_marker_def(&palette.arrow));
    parts.push("</defs>".to_string());

    for node in &scene.nodes {
        render_node(node, &mut parts);
    }

    parts.push("</svg>".to_string());

    parts.join("\n")
}

fn svg_open_tag(width: u32, height: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = width,
        h = height
    )
}

/// The single arrowhead marker every connector references.
fn arrow_marker_def(fill: &str) -> String {
    format!(
        r#"  <marker id="arrowhead" markerWidth="{size}" markerHeight="{size}" refX="{ref_x}" refY="{ref_y}" orient="auto" markerUnits="strokeWidth">
    <path d="{path}" fill="{fill}" />
  </marker>"#,
        size = fmt_num(ArrowHead::MARKER_SIZE),
        ref_x = fmt_num(ArrowHead::REF_X),
        ref_y = fmt_num(ArrowHead::REF_Y),
        path = ArrowHead::PATH,
        fill = fill
    )
}

// ============================================================================
// Primitive rendering
// ============================================================================

fn render_node(node: &Node, parts: &mut Vec<String>) {
    match node {
        Node::Rect(rect) => parts.push(render_rect(rect)),
        Node::Line(line) => parts.push(render_line(line)),
        Node::Text(text) => parts.push(render_text(text)),
        Node::Circle(circle) => parts.push(render_circle(circle)),
        Node::Group(children) => {
            parts.push("<g>".to_string());
            for child in children {
                render_node(child, parts);
            }
            parts.push("</g>".to_string());
        }
    }
}

fn render_rect(rect: &Rect) -> String {
    let fill = rect.fill.as_deref().unwrap_or("none");
    let stroke = match &rect.stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color,
            fmt_num(stroke.width)
        ),
        None => String::new(),
    };

    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{rx}" ry="{rx}" fill="{}"{} />"#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
        fill,
        stroke,
        rx = fmt_num(rect.rx)
    )
}

fn render_line(line: &Line) -> String {
    let mut extra = String::new();
    if line.dashed {
        extra.push_str(&format!(r#" stroke-dasharray="{}""#, DASH_PATTERN));
    }
    if line.arrowhead {
        extra.push_str(r#" marker-end="url(#arrowhead)""#);
    }

    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{} />"#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.stroke.color,
        fmt_num(line.stroke.width),
        extra
    )
}

fn render_text(text: &Text) -> String {
    let anchor = match text.anchor {
        Anchor::Start => "",
        Anchor::Middle => r#" text-anchor="middle""#,
    };

    format!(
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}"{}>{}</text>"#,
        fmt_num(text.x),
        fmt_num(text.y),
        FONT_FAMILY,
        fmt_num(text.size),
        text.weight,
        text.fill,
        anchor,
        escape_xml(&text.content)
    )
}

fn render_circle(circle: &Circle) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
        fmt_num(circle.cx),
        fmt_num(circle.cy),
        fmt_num(circle.r),
        circle.fill
    )
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate: whole numbers without a decimal point,
/// everything else with Rust's shortest round-trip representation.
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Stroke;

    #[test]
    fn escape_xml_covers_markup_characters() {
        assert_eq!(
            escape_xml(r#"Dosing & <Coverage> "Engine" 'v2'"#),
            "Dosing &amp; &lt;Coverage&gt; &quot;Engine&quot; &#39;v2&#39;"
        );
        assert_eq!(escape_xml("severity \u{2192} dose"), "severity \u{2192} dose");
    }

    #[test]
    fn fmt_num_drops_trailing_point_for_whole_numbers() {
        assert_eq!(fmt_num(155.0), "155");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn dashed_lines_carry_the_dash_pattern_and_marker() {
        let line = Line {
            x1: 420.0,
            y1: 515.0,
            x2: 390.0,
            y2: 515.0,
            stroke: Stroke {
                color: "#475569".to_string(),
                width: 2.5,
            },
            dashed: true,
            arrowhead: true,
        };
        let rendered = render_line(&line);
        assert!(rendered.contains(r#"stroke-dasharray="6 6""#));
        assert!(rendered.contains(r##"marker-end="url(#arrowhead)""##));
        assert!(rendered.contains(r#"stroke-width="2.5""#));
    }

    #[test]
    fn solid_lines_have_no_dash_pattern() {
        let line = Line {
            x1: 300.0,
            y1: 155.0,
            x2: 330.0,
            y2: 155.0,
            stroke: Stroke {
                color: "#475569".to_string(),
                width: 2.5,
            },
            dashed: false,
            arrowhead: true,
        };
        assert!(!render_line(&line).contains("stroke-dasharray"));
    }

    #[test]
    fn groups_nest_their_children() {
        let scene = {
            let mut scene = Scene::new(10, 10);
            scene.push(Node::Group(vec![Node::Circle(Circle {
                cx: 5.0,
                cy: 5.0,
                r: 2.0,
                fill: "#22c55e".to_string(),
            })]));
            scene
        };
        let svg = render_svg(&scene, &Palette::default());
        let g_open = svg.find("<g>").unwrap();
        let circle = svg.find("<circle").unwrap();
        let g_close = svg.find("</g>").unwrap();
        assert!(g_open < circle && circle < g_close);
    }
}
