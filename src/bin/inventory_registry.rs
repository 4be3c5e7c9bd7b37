// src/bin/inventory_registry.rs

use asset_registry::{
    config::{connect, InventoryState, ServiceKind, Settings},
    init_tracing,
    routes::inventory_router,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env(ServiceKind::Inventory)?;
    let db_pool = connect(&settings).await?;

    sqlx::migrate!("migrations/inventory").run(&db_pool).await?;
    tracing::info!("✅ Inventory registry migrations applied");

    let state = InventoryState::with_settings(db_pool, &settings)?;
    tracing::info!(space_registry = %settings.space_registry_url, "rooms resolved remotely");

    let app = inventory_router(state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("🚀 Inventory registry listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
