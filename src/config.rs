// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    clients::{HttpRoomDirectory, RoomDirectory},
    db::{InventoryRepository, SpaceRepository, TransferRepository},
    services::{InventoryService, LocationService, SpaceService, TransferService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Space,
    Inventory,
    Ledger,
}

impl ServiceKind {
    fn default_bind_addr(self) -> &'static str {
        match self {
            ServiceKind::Space => "0.0.0.0:8081",
            ServiceKind::Inventory => "0.0.0.0:8082",
            ServiceKind::Ledger => "0.0.0.0:8083",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub default_page_size: i64,
    // Inventory Registry only.
    /// Upper bound on items planned by one category creation.
    pub max_allocation: i64,
    pub space_registry_url: String,
    pub space_registry_timeout: Duration,
}

impl Settings {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env(kind: ServiceKind) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(kind, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(kind: ServiceKind, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let settings = Self {
            database_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| kind.default_bind_addr().to_string()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", 10)?,
            max_allocation: parse_or(&lookup, "MAX_ALLOCATION_SIZE", 10_000)?,
            space_registry_url: lookup("SPACE_REGISTRY_URL")
                .unwrap_or_else(|| "http://localhost:8081".to_string()),
            space_registry_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SPACE_REGISTRY_TIMEOUT_SECS",
                5,
            )?),
        };

        if settings.default_page_size < 1 {
            return Err(anyhow!("DEFAULT_PAGE_SIZE must be at least 1"));
        }
        if settings.max_allocation < 1 {
            return Err(anyhow!("MAX_ALLOCATION_SIZE must be at least 1"));
        }
        Ok(settings)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has an invalid value {raw:?}: {e}")),
        None => Ok(default),
    }
}

pub async fn connect(settings: &Settings) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .acquire_timeout(settings.db_acquire_timeout)
        .connect(&settings.database_url)
        .await
        .context("could not connect to the database")?;

    tracing::info!("✅ Database connection established");
    Ok(pool)
}

// ---
// Per-service application state
// ---

#[derive(Clone)]
pub struct SpaceState {
    pub db_pool: PgPool,
    pub default_page_size: i64,
    pub space_service: SpaceService,
}

impl SpaceState {
    pub fn new(db_pool: PgPool, default_page_size: i64) -> Self {
        let space_service = SpaceService::new(SpaceRepository::new(db_pool.clone()));
        Self {
            db_pool,
            default_page_size,
            space_service,
        }
    }
}

#[derive(Clone)]
pub struct InventoryState {
    pub db_pool: PgPool,
    pub default_page_size: i64,
    pub inventory_service: InventoryService,
    pub location_service: LocationService,
}

impl InventoryState {
    pub fn new(
        db_pool: PgPool,
        default_page_size: i64,
        max_allocation: i64,
        rooms: Arc<dyn RoomDirectory>,
    ) -> Self {
        let repo = InventoryRepository::new(db_pool.clone());
        Self {
            db_pool,
            default_page_size,
            inventory_service: InventoryService::new(repo.clone(), max_allocation),
            location_service: LocationService::new(repo, rooms),
        }
    }

    /// State wired to the Space Registry over HTTP.
    pub fn with_settings(db_pool: PgPool, settings: &Settings) -> anyhow::Result<Self> {
        let rooms = HttpRoomDirectory::new(
            settings.space_registry_url.clone(),
            settings.space_registry_timeout,
        )?;
        Ok(Self::new(
            db_pool,
            settings.default_page_size,
            settings.max_allocation,
            Arc::new(rooms),
        ))
    }
}

#[derive(Clone)]
pub struct LedgerState {
    pub db_pool: PgPool,
    pub default_page_size: i64,
    pub transfer_service: TransferService,
}

impl LedgerState {
    pub fn new(db_pool: PgPool, default_page_size: i64) -> Self {
        let transfer_service = TransferService::new(TransferRepository::new(db_pool.clone()));
        Self {
            db_pool,
            default_page_size,
            transfer_service,
        }
    }
}
