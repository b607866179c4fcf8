//! Climate Scenes - annotated climate line charts

use climate_scenes::config::AppConfig;
use climate_scenes::gui::ClimateScenesApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            AppConfig::default()
        }
    };
    log::info!("Reading scene data from {}", config.data_dir.display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Climate Scenes"),
        ..Default::default()
    };

    eframe::run_native(
        "Climate Scenes",
        options,
        Box::new(|cc| Ok(Box::new(ClimateScenesApp::new(cc, config)))),
    )
}
