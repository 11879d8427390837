/// Example program to print the loaded configuration
///
/// Run with: cargo run -p lattice-config --example print_config

fn main() {
    // Load configuration from lattice.toml plus LATTICE_* overrides
    let config = lattice_config::LatticeConfig::load();

    println!("=== Lattice Configuration ===\n");

    println!("Widget Settings:");
    println!("  Item Count: {}", config.widget.item_count);
    println!("  Bottom Color: {:?}", config.widget.bottom_color);
    println!("  Bottom Color (static): {:?}", config.widget.bottom_color_static);
    println!("  Text Color: {:?}", config.widget.text_color);
    println!();

    println!("Display Settings:");
    println!("  Density: {}", config.display.density);
    println!();

    println!("Font Settings:");
    println!("  Path: {:?}", config.font.path);
    println!();

    println!("Demo Settings:");
    println!("  Width: {:?}", config.demo.width);
    println!("  Height: {:?}", config.demo.height);
    println!("  Text: {:?}", config.demo.text);
    println!("  Focused: {}", config.demo.focused);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
