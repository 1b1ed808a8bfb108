mod core;
mod gui;
mod metadata;
mod player;

use eframe::egui;
use gui::PlayerApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = core::AppConfig::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config ({err}), using defaults");
        core::AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Reproductor Multimedia"),
        ..Default::default()
    };

    eframe::run_native(
        "Reproductor Multimedia",
        options,
        Box::new(move |cc| {
            match PlayerApp::new(cc, config) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    eprintln!("Failed to initialize player: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
