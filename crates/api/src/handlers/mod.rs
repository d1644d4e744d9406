pub mod room;
pub mod upload;
