pub mod room_directory;
pub use room_directory::{HttpRoomDirectory, RoomDirectory};
