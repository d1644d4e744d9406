//! Application services orchestrating validation, resolution, assembly, and
//! persistence.

pub mod rooms;
pub mod uploads;
