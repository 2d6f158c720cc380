use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wfh_attendance_proxy::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wfh_attendance_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        auth = %config.auth_upstream,
        attendance = %config.attendance_upstream,
        admin = %config.admin_upstream,
        static_dir = %config.static_dir.display(),
        timeout_secs = config.upstream_timeout.as_secs(),
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let state = AppState::new(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Proxy listening on {}", addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
