mod app;
mod error;
mod modulation;
mod pattern;
mod store;
mod types;

use clap::Parser;
use eframe::egui::Color32;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive radial pattern renderer", long_about = None)]
struct Cli {
    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 760.0)]
    height: f32,

    /// Startup fill color as a hex string, e.g. #0ea5e9.
    #[arg(long, value_parser = types::parse_hex_color)]
    color: Option<Color32>,
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    tracing::info!(width = cli.width, height = cli.height, "starting pattern studio");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Radial Pattern Studio",
        options,
        Box::new(move |cc| Ok(Box::new(app::StudioApp::new(cc, cli.color)))),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
