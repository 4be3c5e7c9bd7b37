pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod space_repo;
pub use space_repo::SpaceRepository;
pub mod transfer_repo;
pub use transfer_repo::TransferRepository;
