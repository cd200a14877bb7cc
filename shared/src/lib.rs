//! Shared types for the floor-plan workspace
//!
//! Data types exchanged with the front-end clients (tiles, plans, summaries),
//! the error taxonomy, and id/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ErrorCode, FloorPlanError, FloorPlanResult};
pub use models::{FloorPlan, MODULE_SEATS, PlanSummary, TableStatus, TableTile};
pub use serde::{Deserialize, Serialize};
