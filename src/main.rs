use mymusic_practice::{PracticeApp, PracticeConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== MyMusic Practice ===");

    // Config : premier argument, sinon le fichier par défaut de l'utilisateur
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(PracticeConfig::default_path);
    let config = PracticeConfig::load_or_default(config_path.as_deref());

    info!(
        "Announcer timing: {} ms per stage, {} ms drain",
        config.timing.dwell_ms, config.timing.drain_ms
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("MyMusic Practice"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "MyMusic Practice",
        native_options,
        Box::new(move |_cc| Ok(Box::new(PracticeApp::new(config)))),
    ) {
        error!("UI failed: {}", e);
    }
}
