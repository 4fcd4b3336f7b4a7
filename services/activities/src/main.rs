use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use activities::{
    AppState, credentials, routes, session::SessionManager, store::ActivityStore,
};
use common::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    common::logging::init()?;

    info!("Starting activities service");

    let config = AppConfig::from_env()?;

    // Teachers are read once; a bad file leaves nobody able to log in
    let teachers = credentials::load(&config.credentials_path);

    let app_state = AppState::new(ActivityStore::seeded(), SessionManager::new(teachers));

    // Start the web server
    let app = routes::create_router(app_state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Activities service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
