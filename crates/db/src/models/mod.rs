pub mod lookup;
pub mod room;
