//! # floor-engine
//!
//! Floor-plan engine for restaurant table layouts.
//!
//! Table modules sit on an integer grid. Modules sharing an edge form one
//! combined table (a group); the engine labels groups, computes their seat
//! capacity from the group's shape and keeps the plan consistent across
//! status toggles, moves and insertions.
//!
//! Every operation is a pure function from a plan snapshot to a new one.
//! Rejected requests (unknown module, occupied cell, full plan) return the
//! input unchanged; the `try_` variants report the reason instead.
//!
//! ## Example
//!
//! ```
//! use floor_engine::{add_tile, move_tile, toggle_status};
//! use shared::models::{FloorPlan, TableStatus};
//!
//! let plan = FloorPlan::new("p1", "Sala", 4, 4);
//! let plan = add_tile(&add_tile(&plan));
//! assert_eq!(plan.tiles[0].seats, 6); // two adjacent modules
//!
//! let second = plan.tiles[1].id.clone();
//! let plan = move_tile(&plan, &second, 3, 3);
//! assert!(plan.tiles.iter().all(|t| t.seats == 2));
//!
//! let plan = toggle_status(&plan, &second);
//! assert_eq!(plan.tile(&second).unwrap().status, TableStatus::Reserved);
//! ```

pub mod command;
pub mod config;
pub mod grouping;
pub mod invariants;
pub mod logger;
pub mod ops;
pub mod regroup;
pub mod seats;
pub mod summary;

// Re-exports
pub use command::{CommandRejection, PlanCommand};
pub use config::EngineConfig;
pub use grouping::{find_group_indices, find_groups, groups_by_id};
pub use invariants::validate;
pub use ops::{
    add_tile, move_tile, toggle_status, try_add_tile, try_move_tile, try_toggle_status,
};
pub use regroup::{normalize, recompute_groups, recompute_groups_with_stamp};
pub use seats::{BoundingBox, PAIR_SEATS, compute_group_seats};
pub use summary::{summarize, total_seats};
