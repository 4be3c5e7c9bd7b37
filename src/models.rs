pub mod inventory;
pub mod space;
pub mod transfer;
