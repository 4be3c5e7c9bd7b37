pub mod allocation;
pub mod capacity;
pub mod identifier;
pub mod inventory_service;
pub mod location_service;
pub mod space_service;
pub mod transfer_service;

pub use inventory_service::InventoryService;
pub use location_service::LocationService;
pub use space_service::SpaceService;
pub use transfer_service::TransferService;
