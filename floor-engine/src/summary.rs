//! Plan header figures

use std::collections::HashSet;

use shared::models::{FloorPlan, PlanSummary, TableStatus, TableTile};

/// Sum of every module's seats. Group members other than the head carry 0,
/// so each combined table is counted once.
pub fn total_seats(tiles: &[TableTile]) -> u32 {
    tiles.iter().map(|t| t.seats).sum()
}

pub fn summarize(plan: &FloorPlan) -> PlanSummary {
    let count = |status: TableStatus| plan.tiles.iter().filter(|t| t.status == status).count();
    let labels: HashSet<&str> = plan.tiles.iter().filter_map(|t| t.group_id.as_deref()).collect();

    PlanSummary {
        tile_count: plan.tiles.len(),
        total_seats: total_seats(&plan.tiles),
        group_count: labels.len(),
        free: count(TableStatus::Free),
        reserved: count(TableStatus::Reserved),
        occupied: count(TableStatus::Occupied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regroup::recompute_groups;

    #[test]
    fn test_summary_counts_each_table_once() {
        let tiles = recompute_groups(vec![
            TableTile::new("t1", 2, 2),
            TableTile::new("t2", 3, 2),
            TableTile::new("t3", 4, 2),
            TableTile::new("t4", 6, 4).with_status(TableStatus::Reserved),
        ]);
        let plan = FloorPlan::new("p", "Sala", 12, 8).with_tiles(tiles);

        assert_eq!(
            summarize(&plan),
            PlanSummary {
                tile_count: 4,
                total_seats: 10,
                group_count: 1,
                free: 3,
                reserved: 1,
                occupied: 0,
            }
        );
    }

    #[test]
    fn test_empty_plan() {
        let plan = FloorPlan::new("p", "Sala", 3, 3);
        assert_eq!(summarize(&plan), PlanSummary::default());
    }
}
