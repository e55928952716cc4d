//! Wiring & DI. Entry point: load config, bootstrap adapters, serve webhook.
//! No business logic here; dispatch is delegated to QueryService.

use std::sync::Arc;

use neis_bot::adapters::kakao::webhook;
use neis_bot::adapters::neis::{MockSchoolInfoGateway, NeisGateway};
use neis_bot::ports::{QueryPort, SchoolInfoGateway};
use neis_bot::shared::AppConfig;
use neis_bot::usecases::QueryService;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Gateway: real NEIS client, or mock when credentials are absent ---
    let gateway: Arc<dyn SchoolInfoGateway> = if cfg.is_neis_configured() {
        info!(
            base_url = %cfg.base_url_or_default(),
            office_code = %cfg.office_code().unwrap_or_default(),
            school_code = %cfg.school_code().unwrap_or_default(),
            "NEIS gateway enabled"
        );
        Arc::new(NeisGateway::new(
            cfg.base_url_or_default(),
            cfg.api_key().unwrap_or_default(),
            cfg.office_code().unwrap_or_default(),
            cfg.school_code().unwrap_or_default(),
            cfg.fetch_timeout_or_default(),
        ))
    } else {
        warn!("NEIS_BOT_API_KEY not set, using mock school-info gateway");
        Arc::new(MockSchoolInfoGateway::new())
    };

    // --- Service + webhook ---
    let service: Arc<dyn QueryPort> = Arc::new(QueryService::new(gateway));
    let app = webhook::router(service);

    let addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "webhook listening");
    axum::serve(listener, app).await?;

    Ok(())
}
