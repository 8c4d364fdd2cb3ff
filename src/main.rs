use alife_viewer::adapters::outbound::{
    init_combined_logger, HttpSimulationApi, IntervalScheduler, PixmapSurface,
};
use alife_viewer::application::RenderLoopClient;
use alife_viewer::Config;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Installed without the `log` bridge so fast_log can own the `log` facade.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load(&config_path)?;
    info!("Configuration loaded from {}", config_path);
    info!("Simulation server: {}", config.server.base_url);

    let logger = init_combined_logger(config.logging.file.as_deref(), config.log_level());
    let api = Arc::new(HttpSimulationApi::new(&config.server)?);
    let surface = PixmapSurface::from_config(&config.canvas)?;
    let scheduler = IntervalScheduler::new(config.client.frames_per_second);

    let mut client = RenderLoopClient::initialize(
        api,
        Box::new(surface),
        Box::new(scheduler),
        logger,
        config.session.clone(),
        config.client.clone(),
    )
    .await;

    tokio::select! {
        state = client.start() => {
            info!("Render loop stopped in state {:?}", state);
        }
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down viewer");
        }
    }

    info!("Drew {} frames", client.iteration());
    Ok(())
}
