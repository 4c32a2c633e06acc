use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use instructor_directory::api::router;
use instructor_directory::auth::{AuthClient, AuthConfig, DisabledAuthClient, HttpAuthClient};
use instructor_directory::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "instructor_directory=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://instructors.db?mode=rwc".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let auth: Arc<dyn AuthClient> = match AuthConfig::new_from_env() {
        Ok(config) => Arc::new(HttpAuthClient::new(config)?),
        Err(err) => {
            warn!("identity provider not configured, admin sign-in disabled: {}", err);
            Arc::new(DisabledAuthClient)
        }
    };

    let state = AppState { db: pool, auth };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
