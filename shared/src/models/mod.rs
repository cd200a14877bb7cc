//! Data models
//!
//! Shared with the front-end clients (via JSON). Field names follow the
//! clients' camelCase convention.

pub mod floor_plan;
pub mod table_tile;

// Re-exports
pub use floor_plan::*;
pub use table_tile::*;
