//! Group labelling and seat assignment
//!
//! After every structural change the whole plan is regrouped: each connected
//! group of two or more modules gets a fresh label and its seat count on the
//! head module; isolated modules go back to two seats and no label.

use std::collections::HashSet;

use shared::models::{FloorPlan, MODULE_SEATS, TableTile};
use shared::util::snowflake_id;
use tracing::debug;

use crate::grouping::find_group_indices;
use crate::seats::compute_group_seats;

/// Recompute `groupId` and `seats` of every tile.
///
/// Cardinality, order, ids, positions and statuses are preserved.
pub fn recompute_groups(tiles: Vec<TableTile>) -> Vec<TableTile> {
    let stamp = pass_stamp(&tiles);
    recompute_groups_with_stamp(tiles, stamp)
}

/// Same as [`recompute_groups`] with an explicit label stamp.
///
/// Labels are `g-{stamp}-{index}`, index being the group's position in
/// emission order.
pub fn recompute_groups_with_stamp(mut tiles: Vec<TableTile>, stamp: i64) -> Vec<TableTile> {
    for tile in &mut tiles {
        tile.group_id = None;
        tile.seats = MODULE_SEATS;
    }

    let groups = find_group_indices(&tiles);
    let mut grouped = 0usize;

    for (index, members) in groups.iter().enumerate() {
        if members.len() < 2 {
            continue;
        }

        let seats = {
            let refs: Vec<&TableTile> = members.iter().map(|&i| &tiles[i]).collect();
            compute_group_seats(&refs)
        };
        let head = head_index(&tiles, members);
        let group_id = group_label(stamp, index);

        for &i in members {
            let tile = &mut tiles[i];
            tile.group_id = Some(group_id.clone());
            tile.seats = if i == head { seats } else { 0 };
        }
        grouped += 1;
    }

    debug!(
        tiles = tiles.len(),
        groups = groups.len(),
        combined = grouped,
        stamp,
        "Regrouped floor plan"
    );

    tiles
}

/// Regroup a loaded plan, repairing stale labels and seat counts.
pub fn normalize(mut plan: FloorPlan) -> FloorPlan {
    plan.tiles = recompute_groups(std::mem::take(&mut plan.tiles));
    plan
}

/// Top-most, then left-most member
fn head_index(tiles: &[TableTile], members: &[usize]) -> usize {
    members
        .iter()
        .copied()
        .min_by_key(|&i| (tiles[i].y, tiles[i].x))
        .unwrap_or(members[0])
}

fn group_label(stamp: i64, index: usize) -> String {
    format!("g-{stamp}-{index}")
}

/// Draw a stamp whose labels cannot clash with any label already on the plan.
fn pass_stamp(tiles: &[TableTile]) -> i64 {
    let taken: HashSet<&str> = tiles.iter().filter_map(|t| t.group_id.as_deref()).collect();
    loop {
        let stamp = snowflake_id();
        let prefix = format!("g-{stamp}-");
        if !taken.iter().any(|label| label.starts_with(&prefix)) {
            return stamp;
        }
    }
}
