use anyhow::Context;
use clap::Parser;
use locality_relay::core::ConfigProvider;
use locality_relay::utils::{logger, validation::Validate};
use locality_relay::{create_router, AppState, CliConfig, HttpGraphQlClient, Relay, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting locality-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path))?;
            serve(&config).await
        }
        None => serve(&cli).await,
    };

    if let Err(e) = &outcome {
        tracing::error!("❌ locality-relay stopped: {:#}", e);
    }
    outcome
}

async fn serve<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    // 驗證配置
    config.validate().context("invalid configuration")?;

    let relay = Relay::new(Arc::new(HttpGraphQlClient::new()), config);
    let router = create_router(AppState {
        relay: Arc::new(relay),
    });

    tracing::info!("Search endpoint: {}", config.search_endpoint());
    tracing::info!("Estimation endpoint: {}", config.estimation_endpoint());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!("✅ Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
