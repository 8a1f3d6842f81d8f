pub mod extract;
pub mod rooms;
