use anyhow::{Context, Result};
use clap::Parser;
use image_relay::{
    adapters::inbound::http::router::{create_router, AppState},
    app::{AppBuilder, AppConfig},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "image-relay-server")]
#[command(about = "Fetch images from URLs and relay them into a storage bucket", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Base URL of the storage service
    #[arg(long, env = "STORAGE_ENDPOINT")]
    storage_endpoint: Option<String>,

    /// Privileged service credential for uploads (server-side only)
    #[arg(long, env = "STORAGE_SERVICE_KEY", hide_env_values = true)]
    storage_service_key: Option<String>,

    /// Public credential for read-only client access
    #[arg(long, env = "STORAGE_ANON_KEY", hide_env_values = true)]
    storage_anon_key: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> AppConfig {
        AppConfig {
            endpoint: self.storage_endpoint.clone(),
            service_key: self.storage_service_key.clone(),
            anon_key: self.storage_anon_key.clone(),
        }
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.clone()));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    info!("Starting image relay server");

    let config = cli.to_app_config();
    if !config.has_credentials() {
        // Intentionally not fatal: uploads will answer with setup guidance.
        warn!("storage credentials incomplete; uploads will fail until STORAGE_ENDPOINT and STORAGE_SERVICE_KEY are set");
    }

    let upload_service = AppBuilder::new().with_config(config).build();

    let state = AppState {
        upload_service: Arc::new(upload_service),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_storage_flags() {
        let cli = Cli::parse_from([
            "image-relay-server",
            "--port",
            "8080",
            "--storage-endpoint",
            "https://project.example.co",
            "--storage-service-key",
            "service-key",
        ]);

        assert_eq!(cli.port, 8080);
        let config = cli.to_app_config();
        assert!(config.has_credentials());
        assert!(config.anon_key.is_none());
    }

    #[test]
    fn cli_defaults_leave_credentials_unset() {
        let cli = Cli::parse_from(["image-relay-server"]);
        assert_eq!(cli.port, 3000);
        assert!(!cli.to_app_config().has_credentials());
    }
}
