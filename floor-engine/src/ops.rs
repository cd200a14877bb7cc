//! Plan operations: toggle status, move a module, add a module
//!
//! Every operation takes a plan snapshot and returns a new one. The `try_`
//! forms report why a request was rejected; the plain forms return an
//! unchanged copy of the input instead.

use shared::error::{FloorPlanError, FloorPlanResult};
use shared::models::{FloorPlan, TableTile};
use shared::util::new_tile_id;
use tracing::{debug, instrument};

use crate::regroup::recompute_groups;

/// Advance the status of a module and of every module in its group.
#[instrument(skip(plan), fields(plan_id = %plan.id))]
pub fn try_toggle_status(plan: &FloorPlan, tile_id: &str) -> FloorPlanResult<FloorPlan> {
    let target = plan
        .tile(tile_id)
        .ok_or_else(|| FloorPlanError::TileNotFound {
            tile_id: tile_id.to_string(),
        })?;

    let next = target.status.next();
    let group_id = target.group_id.as_deref();
    let affected = |tile: &TableTile| match group_id {
        Some(group_id) => tile.group_id.as_deref() == Some(group_id),
        None => tile.id == tile_id,
    };

    let mut updated = plan.clone();
    let mut changed = 0usize;
    for tile in updated.tiles.iter_mut() {
        if affected(&*tile) {
            tile.status = next;
            changed += 1;
        }
    }

    debug!(status = %next, changed, "Toggled table status");
    Ok(updated)
}

/// Toggle status, or return the plan unchanged for an unknown module.
pub fn toggle_status(plan: &FloorPlan, tile_id: &str) -> FloorPlan {
    unchanged_on_reject(plan, try_toggle_status(plan, tile_id))
}

/// Move a module to `(new_x, new_y)`, clamped into the plan, then regroup.
///
/// Rejected when another module already sits on the clamped cell. Moving a
/// module onto its own cell is allowed.
#[instrument(skip(plan), fields(plan_id = %plan.id))]
pub fn try_move_tile(
    plan: &FloorPlan,
    tile_id: &str,
    new_x: i64,
    new_y: i64,
) -> FloorPlanResult<FloorPlan> {
    let x = clamp_axis(new_x, plan.width);
    let y = clamp_axis(new_y, plan.height);

    if let Some(occupant) = plan.tile_at(x, y).filter(|t| t.id != tile_id) {
        return Err(FloorPlanError::CellOccupied {
            x,
            y,
            occupant: occupant.id.clone(),
        });
    }

    let index = plan
        .tiles
        .iter()
        .position(|t| t.id == tile_id)
        .ok_or_else(|| FloorPlanError::TileNotFound {
            tile_id: tile_id.to_string(),
        })?;

    let mut tiles = plan.tiles.clone();
    tiles[index].x = x;
    tiles[index].y = y;

    debug!(x, y, "Moved table module");
    Ok(FloorPlan {
        tiles: recompute_groups(tiles),
        ..plan.clone()
    })
}

/// Move a module, or return the plan unchanged on collision or unknown module.
pub fn move_tile(plan: &FloorPlan, tile_id: &str, new_x: i64, new_y: i64) -> FloorPlan {
    unchanged_on_reject(plan, try_move_tile(plan, tile_id, new_x, new_y))
}

/// Place a new free module on the first empty cell in row-major order,
/// then regroup.
#[instrument(skip(plan), fields(plan_id = %plan.id))]
pub fn try_add_tile(plan: &FloorPlan) -> FloorPlanResult<FloorPlan> {
    let (x, y) = plan.first_free_cell().ok_or(FloorPlanError::PlanFull {
        width: plan.width,
        height: plan.height,
    })?;

    let id = fresh_tile_id(plan);
    debug!(tile_id = %id, x, y, "Added table module");

    let mut tiles = plan.tiles.clone();
    tiles.push(TableTile::new(id, x, y));

    Ok(FloorPlan {
        tiles: recompute_groups(tiles),
        ..plan.clone()
    })
}

/// Add a module, or return the plan unchanged when it is full.
pub fn add_tile(plan: &FloorPlan) -> FloorPlan {
    unchanged_on_reject(plan, try_add_tile(plan))
}

fn clamp_axis(value: i64, size: u32) -> u32 {
    let max = i64::from(size) - 1;
    // size 0 leaves max at -1; the lower bound wins
    value.min(max).max(0) as u32
}

fn fresh_tile_id(plan: &FloorPlan) -> String {
    loop {
        let id = new_tile_id();
        if plan.tile(&id).is_none() {
            return id;
        }
    }
}

fn unchanged_on_reject(plan: &FloorPlan, result: FloorPlanResult<FloorPlan>) -> FloorPlan {
    result.unwrap_or_else(|err| {
        debug!(plan_id = %plan.id, code = %err.code(), "Rejected: {err}");
        plan.clone()
    })
}
