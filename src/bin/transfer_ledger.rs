// src/bin/transfer_ledger.rs

use asset_registry::{
    config::{connect, LedgerState, ServiceKind, Settings},
    init_tracing,
    routes::ledger_router,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env(ServiceKind::Ledger)?;
    let db_pool = connect(&settings).await?;

    sqlx::migrate!("migrations/ledger").run(&db_pool).await?;
    tracing::info!("✅ Transfer ledger migrations applied");

    let app = ledger_router(LedgerState::new(db_pool, settings.default_page_size));

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("🚀 Transfer ledger listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
