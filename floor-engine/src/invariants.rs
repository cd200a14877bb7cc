//! Plan consistency checks
//!
//! Used when a plan arrives from outside (JSON file, client payload) and in
//! tests after every operation.

use std::collections::{HashMap, HashSet};

use shared::error::{FloorPlanError, FloorPlanResult};
use shared::models::{FloorPlan, MODULE_SEATS};

use crate::grouping::find_groups;
use crate::seats::compute_group_seats;

/// Check that a plan is laid out and grouped consistently.
///
/// - width and height are positive
/// - module ids are unique
/// - every module lies inside the plan, one module per cell
/// - isolated modules have no label and two seats
/// - each combined group shares one label of its own, and only its head
///   (top-most, then left-most) carries the group's seats
pub fn validate(plan: &FloorPlan) -> FloorPlanResult<()> {
    if plan.width == 0 || plan.height == 0 {
        return Err(FloorPlanError::InvalidDimensions {
            width: plan.width,
            height: plan.height,
        });
    }

    let mut ids = HashSet::new();
    let mut cells: HashMap<(u32, u32), &str> = HashMap::new();
    for tile in &plan.tiles {
        if !ids.insert(tile.id.as_str()) {
            return Err(FloorPlanError::DuplicateTileId {
                tile_id: tile.id.clone(),
            });
        }
        if !plan.contains(tile.x, tile.y) {
            return Err(FloorPlanError::OutOfBounds {
                tile_id: tile.id.clone(),
                x: tile.x,
                y: tile.y,
                width: plan.width,
                height: plan.height,
            });
        }
        if let Some(first) = cells.insert(tile.position(), &tile.id) {
            return Err(FloorPlanError::DuplicateCell {
                x: tile.x,
                y: tile.y,
                first: first.to_string(),
                second: tile.id.clone(),
            });
        }
    }

    let mut labels: HashSet<&str> = HashSet::new();
    for group in find_groups(&plan.tiles) {
        let seed = group[0];

        if group.len() == 1 {
            if seed.group_id.is_some() {
                return Err(FloorPlanError::group_inconsistent(&seed.id, "isolated module carries a group id"));
            }
            if seed.seats != MODULE_SEATS {
                return Err(FloorPlanError::group_inconsistent(
                    &seed.id,
                    format!("isolated module has {} seats", seed.seats),
                ));
            }
            continue;
        }

        let Some(label) = seed.group_id.as_deref() else {
            return Err(FloorPlanError::group_inconsistent(&seed.id, "combined module has no group id"));
        };
        if let Some(stray) = group.iter().find(|t| t.group_id.as_deref() != Some(label)) {
            return Err(FloorPlanError::group_inconsistent(
                &stray.id,
                format!("expected group id {label}"),
            ));
        }
        if !labels.insert(label) {
            return Err(FloorPlanError::group_inconsistent(
                &seed.id,
                format!("group id {label} is shared by separate groups"),
            ));
        }

        let head = group
            .iter()
            .min_by_key(|t| (t.y, t.x))
            .copied()
            .unwrap_or(seed);
        let expected = compute_group_seats(&group);
        for tile in &group {
            let want = if tile.id == head.id { expected } else { 0 };
            if tile.seats != want {
                return Err(FloorPlanError::group_inconsistent(
                    &tile.id,
                    format!("has {} seats, expected {want}", tile.seats),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regroup::recompute_groups;
    use shared::error::ErrorCode;
    use shared::models::TableTile;

    fn grouped(width: u32, height: u32, cells: &[(&str, u32, u32)]) -> FloorPlan {
        let tiles = cells
            .iter()
            .map(|&(id, x, y)| TableTile::new(id, x, y))
            .collect();
        FloorPlan::new("p", "Sala", width, height).with_tiles(recompute_groups(tiles))
    }

    fn code(plan: &FloorPlan) -> ErrorCode {
        validate(plan).unwrap_err().code()
    }

    #[test]
    fn test_regrouped_plan_is_valid() {
        let plan = grouped(12, 8, &[("t1", 2, 2), ("t2", 3, 2), ("t3", 4, 2), ("t4", 6, 4)]);
        assert_eq!(validate(&plan), Ok(()));
    }

    #[test]
    fn test_dimensions() {
        let plan = FloorPlan::new("p", "Sala", 0, 3);
        assert_eq!(code(&plan), ErrorCode::InvalidDimensions);
    }

    #[test]
    fn test_layout_violations() {
        let mut plan = grouped(4, 4, &[("a", 0, 0), ("b", 3, 3)]);
        plan.tiles[1].id = "a".into();
        assert_eq!(code(&plan), ErrorCode::DuplicateTileId);

        let mut plan = grouped(4, 4, &[("a", 0, 0), ("b", 3, 3)]);
        plan.tiles[1].x = 4;
        assert_eq!(code(&plan), ErrorCode::TileOutOfBounds);

        let mut plan = grouped(4, 4, &[("a", 0, 0), ("b", 3, 3)]);
        plan.tiles[1].x = 0;
        plan.tiles[1].y = 0;
        assert_eq!(code(&plan), ErrorCode::DuplicateCell);
    }

    #[test]
    fn test_group_violations() {
        // stale label on an isolated module
        let mut plan = grouped(4, 4, &[("a", 0, 0)]);
        plan.tiles[0].group_id = Some("g1".into());
        assert_eq!(code(&plan), ErrorCode::GroupInconsistent);

        // seats on a non-head member
        let mut plan = grouped(4, 4, &[("a", 0, 0), ("b", 1, 0)]);
        plan.tiles[1].seats = 2;
        assert_eq!(code(&plan), ErrorCode::GroupInconsistent);

        // adjacent modules that were never regrouped
        let plan = FloorPlan::new("p", "Sala", 4, 4)
            .with_tiles(vec![TableTile::new("a", 0, 0), TableTile::new("b", 0, 1)]);
        assert_eq!(code(&plan), ErrorCode::GroupInconsistent);
    }

    #[test]
    fn test_label_shared_by_two_groups() {
        let mut plan = grouped(8, 8, &[("a", 0, 0), ("b", 1, 0), ("c", 5, 5), ("d", 5, 6)]);
        let label = plan.tiles[0].group_id.clone();
        plan.tiles[2].group_id = label.clone();
        plan.tiles[3].group_id = label;
        assert_eq!(code(&plan), ErrorCode::GroupInconsistent);
    }
}
