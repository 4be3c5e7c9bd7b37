// src/bin/space_registry.rs

use asset_registry::{
    config::{connect, ServiceKind, Settings, SpaceState},
    init_tracing,
    routes::space_router,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env(ServiceKind::Space)?;
    let db_pool = connect(&settings).await?;

    sqlx::migrate!("migrations/space").run(&db_pool).await?;
    tracing::info!("✅ Space registry migrations applied");

    let app = space_router(SpaceState::new(db_pool, settings.default_page_size));

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("🚀 Space registry listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
