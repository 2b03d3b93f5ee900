//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `catalog` is immutable compiled-in data; `upload` is the only mutable
//! model and lives in one signal owned by the detect page.

pub mod catalog;
pub mod upload;
