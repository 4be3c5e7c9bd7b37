// src/docs.rs

use utoipa::OpenApi;

use crate::{common, handlers, models};

#[derive(OpenApi)]
#[openapi(
    info(title = "Space Registry", description = "Buildings and the rooms they hold"),
    paths(
        // --- Buildings ---
        handlers::buildings::list_buildings,
        handlers::buildings::create_building,
        handlers::buildings::get_building,
        handlers::buildings::update_building,
        handlers::buildings::delete_building,
        handlers::buildings::check_if_exist,

        // --- Rooms ---
        handlers::rooms::list_rooms,
        handlers::rooms::create_room,
        handlers::rooms::get_room,
        handlers::rooms::update_room,
        handlers::rooms::delete_room,
    ),
    components(
        schemas(
            common::response::MessageOnly,
            models::space::Building,
            models::space::BuildingWithRooms,
            models::space::Room,
            models::space::RoomDetail,

            // --- Payloads ---
            models::space::NewBuilding,
            models::space::InlineRoom,
            models::space::BuildingUpdate,
            models::space::NewRoom,
        )
    ),
    tags(
        (name = "Buildings", description = "Buildings and their declared area"),
        (name = "Rooms", description = "Rooms, checked against their building's area")
    )
)]
pub struct SpaceApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory Registry", description = "Inventories and their numbered items"),
    paths(
        // --- Inventories ---
        handlers::inventories::list_inventories,
        handlers::inventories::create_inventory,
        handlers::inventories::get_inventory,
        handlers::inventories::update_inventory,
        handlers::inventories::delete_inventory,
        handlers::inventories::inventories_by_room,

        // --- Items ---
        handlers::inventory_items::list_items,
        handlers::inventory_items::create_item,
        handlers::inventory_items::get_item,
        handlers::inventory_items::update_item,
        handlers::inventory_items::delete_item,
        handlers::inventory_items::search_by_sign_number,
    ),
    components(
        schemas(
            common::response::MessageOnly,
            models::inventory::InventoryCategory,
            models::inventory::InventoryItem,
            models::inventory::InventoryItemDetail,
            models::inventory::InventoryItemWithRoom,
            models::inventory::CategoryCountInRoom,
            models::inventory::CategoryAllocation,

            // --- Payloads ---
            models::inventory::NewInventory,
            models::inventory::ExplicitItem,
            models::inventory::InventoryUpdate,
            models::inventory::NewInventoryItem,
        )
    ),
    tags(
        (name = "Inventories", description = "Inventory categories and item allocation"),
        (name = "Inventory items", description = "Numbered items and where they are")
    )
)]
pub struct InventoryApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Transfer Ledger", description = "Inventory moved between buildings"),
    paths(
        // --- Transactions ---
        handlers::transactions::list_transactions,
        handlers::transactions::record_transfer,
        handlers::transactions::get_transaction,
        handlers::transactions::update_transaction,
        handlers::transactions::delete_transaction,

        // --- Lines ---
        handlers::transaction_items::list_items,
        handlers::transaction_items::create_item,
        handlers::transaction_items::get_item,
        handlers::transaction_items::update_item,
        handlers::transaction_items::delete_item,
        handlers::transaction_items::items_by_history,
    ),
    components(
        schemas(
            common::response::MessageOnly,
            models::transfer::TransactionHistory,
            models::transfer::TransactionItem,
            models::transfer::TransferRecord,

            // --- Payloads ---
            models::transfer::NewTransfer,
            models::transfer::TransferLine,
            models::transfer::TransactionUpdate,
            models::transfer::NewTransactionItem,
        )
    ),
    tags(
        (name = "Transactions", description = "Transfer headers"),
        (name = "Transaction items", description = "Quantities moved per inventory")
    )
)]
pub struct LedgerApiDoc;
