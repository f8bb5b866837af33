use ipss_diagram::{Diagram, Exporter, DOWNLOAD_FILENAME};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("ipss-diagram - Intelligent Pesticide Sprinkling System block diagram");
        println!();
        println!("Usage: ipss-diagram [OPTIONS] [OUT_DIR]");
        println!();
        println!("Renders the 1200x900 block diagram and saves it into OUT_DIR");
        println!("(default: current directory) as:");
        println!("  {}", DOWNLOAD_FILENAME);
        println!();
        println!("Options:");
        println!("  -h, --help  Show this help message");
        return;
    }

    env_logger::init();

    // Output directory from argument, current directory otherwise
    let out_dir: String = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .cloned()
        .unwrap_or_else(|| ".".to_string());

    let mut diagram = Diagram::new();
    diagram.render();

    let exporter = Exporter::new(out_dir);
    match exporter.export(diagram.scene()).await {
        Ok(Some(path)) => println!("{}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
