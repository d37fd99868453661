use workout_relay::config::RelayConfig;
use workout_relay::server::relay_routes;
use workout_relay::webhook::Relay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = RelayConfig::from_env()?;

    eprintln!("🏋️ Workout Relay v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Notion API: {}", config.notion_api_base);
    eprintln!("   Webhook: http://{}/webhook", config.listen_addr());
    eprintln!("   Invoke: http://{}/invoke", config.listen_addr());

    let relay = Relay::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %config.listen_addr(), "Workout relay listening");
    axum::serve(listener, relay_routes(relay)).await?;

    Ok(())
}
