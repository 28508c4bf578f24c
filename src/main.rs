// Timeline Table
// Desktop client entry point

use anyhow::{anyhow, Result};
use timeline_table::services::settings::SettingsService;
use timeline_table::ui_egui::TimelineTableApp;

type AppCreationError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Timeline Table");

    let settings_service = SettingsService::from_project_dirs()?;
    let settings = settings_service.load()?;
    log::info!(
        "Using table API at {} (debounce {} ms)",
        settings.client.api_base_url,
        settings.client.debounce_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Timeline Table")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size(TimelineTableApp::min_root_size()),
        ..Default::default()
    };

    let client_settings = settings.client;
    eframe::run_native(
        "Timeline Table",
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, AppCreationError> {
            let app = TimelineTableApp::new(cc, &client_settings)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("Failed to run the desktop client: {}", e))
}
