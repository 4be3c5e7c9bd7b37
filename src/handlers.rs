pub mod buildings;
pub mod inventories;
pub mod inventory_items;
pub mod rooms;
pub mod transaction_items;
pub mod transactions;
