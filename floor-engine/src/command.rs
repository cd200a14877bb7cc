//! Plan commands
//!
//! One variant per user gesture (tap, drag-release, add button). Commands
//! deserialize from tagged JSON, e.g. `{"type":"move","tileId":"t1","x":1,"y":0}`.

use serde::{Deserialize, Serialize};
use shared::error::{ErrorCode, FloorPlanError, FloorPlanResult};
use shared::models::FloorPlan;

use crate::ops;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PlanCommand {
    /// Advance the status of a module and its group
    Toggle { tile_id: String },
    /// Drop a module on a cell (coordinates are clamped into the plan)
    Move { tile_id: String, x: i64, y: i64 },
    /// Add a module on the first free cell
    Add,
}

impl PlanCommand {
    pub fn try_apply(&self, plan: &FloorPlan) -> FloorPlanResult<FloorPlan> {
        match self {
            Self::Toggle { tile_id } => ops::try_toggle_status(plan, tile_id),
            Self::Move { tile_id, x, y } => ops::try_move_tile(plan, tile_id, *x, *y),
            Self::Add => ops::try_add_tile(plan),
        }
    }

    /// Apply, returning the plan unchanged when the command is rejected
    pub fn apply(&self, plan: &FloorPlan) -> FloorPlan {
        match self {
            Self::Toggle { tile_id } => ops::toggle_status(plan, tile_id),
            Self::Move { tile_id, x, y } => ops::move_tile(plan, tile_id, *x, *y),
            Self::Add => ops::add_tile(plan),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Move { .. } => "move",
            Self::Add => "add",
        }
    }
}

/// A command that left the plan unchanged, as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRejection {
    /// Position of the command in the replayed sequence
    pub index: usize,
    pub command: &'static str,
    pub code: ErrorCode,
    pub message: &'static str,
    pub detail: String,
}

impl CommandRejection {
    pub fn new(index: usize, command: &PlanCommand, err: &FloorPlanError) -> Self {
        let code = err.code();
        Self {
            index,
            command: command.name(),
            code,
            message: code.message(),
            detail: err.to_string(),
        }
    }
}
