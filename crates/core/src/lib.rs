//! Pure domain logic shared by the Roomly backend crates.
//!
//! No I/O lives here: error taxonomy, field-level validation error
//! accumulation, image file naming, and common type aliases.

pub mod error;
pub mod naming;
pub mod types;
pub mod validation;
