//! Print the diagram's SVG markup to stdout.
//!
//! ```sh
//! cargo run --example print_svg > diagram.svg
//! ```

use ipss_diagram::{render_to_svg, Diagram};

fn main() {
    let mut diagram = Diagram::new();
    let scene = diagram.render();
    println!("{}", render_to_svg(scene));
}
