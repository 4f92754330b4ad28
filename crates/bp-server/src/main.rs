use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bp_core::BytePressConfig;
use bp_server::state::AppState;

fn load_config() -> Result<BytePressConfig> {
    let mut config = match std::env::var("BYTEPRESS_CONFIG") {
        Ok(path) => BytePressConfig::from_json_file(&path)?,
        Err(_) => BytePressConfig::default(),
    };
    if let Ok(host) = std::env::var("BYTEPRESS_HOST") {
        config.server.host = host;
    }
    if let Some(port) = std::env::var("BYTEPRESS_PORT").ok().and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = load_config()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = bp_server::app_with_state(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("BytePress server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
