// Timeline Table
// HTTP API server entry point

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use timeline_table::services::api::{serve, ApiState};
use timeline_table::services::database::Database;
use timeline_table::services::settings::SettingsService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_service = SettingsService::from_project_dirs()?;
    let settings = settings_service.load()?;
    let server = settings.server;

    if let Some(parent) = Path::new(&server.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let database = Database::new(&server.database_path)?;
    database.initialize_schema()?;
    log::info!("Using database {}", server.database_path);

    let listener = TcpListener::bind(&server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", server.bind_address))?;

    serve(listener, ApiState::new(database)).await
}
