//! Adjacency clustering of table modules
//!
//! Two modules belong to the same group when they share a grid edge
//! (Manhattan distance 1). Diagonal neighbours do not join.

use std::collections::{BTreeMap, VecDeque};

use shared::models::{FloorPlan, TableTile};

/// Partition tiles into connected groups, as indices into `tiles`.
///
/// Breadth-first from each unvisited tile in input order. Groups come out in
/// the order of their seed tile; members in discovery order. Pairwise
/// distance checks make this O(n²), which is fine at floor-plan scale.
pub fn find_group_indices(tiles: &[TableTile]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; tiles.len()];
    let mut groups = Vec::new();

    for seed in 0..tiles.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut queue = VecDeque::from([seed]);
        let mut group = Vec::new();

        while let Some(current) = queue.pop_front() {
            group.push(current);

            for (other, tile) in tiles.iter().enumerate() {
                if !visited[other] && tile.is_adjacent(&tiles[current]) {
                    visited[other] = true;
                    queue.push_back(other);
                }
            }
        }

        groups.push(group);
    }

    groups
}

/// Partition tiles into connected groups.
pub fn find_groups(tiles: &[TableTile]) -> Vec<Vec<&TableTile>> {
    find_group_indices(tiles)
        .into_iter()
        .map(|group| group.into_iter().map(|i| &tiles[i]).collect())
        .collect()
}

/// Members of every labelled group, keyed by `groupId`.
///
/// Isolated modules carry no label and are left out.
pub fn groups_by_id(plan: &FloorPlan) -> BTreeMap<&str, Vec<&TableTile>> {
    let mut groups: BTreeMap<&str, Vec<&TableTile>> = BTreeMap::new();
    for tile in &plan.tiles {
        if let Some(group_id) = tile.group_id.as_deref() {
            groups.entry(group_id).or_default().push(tile);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(groups: &[Vec<&'a TableTile>]) -> Vec<Vec<&'a str>> {
        groups
            .iter()
            .map(|g| g.iter().map(|t| t.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_row_of_three_and_isolated() {
        let tiles = vec![
            TableTile::new("t1", 2, 2),
            TableTile::new("t2", 3, 2),
            TableTile::new("t3", 4, 2),
            TableTile::new("t4", 6, 4),
        ];
        let groups = find_groups(&tiles);
        assert_eq!(ids(&groups), vec![vec!["t1", "t2", "t3"], vec!["t4"]]);
    }

    #[test]
    fn test_diagonal_does_not_connect() {
        let tiles = vec![TableTile::new("a", 0, 0), TableTile::new("b", 1, 1)];
        assert_eq!(find_groups(&tiles).len(), 2);
    }

    #[test]
    fn test_discovery_order_is_breadth_first() {
        // L-shape seeded from the end of one arm: members come out in order
        // of distance from the seed, not input order.
        let tiles = vec![
            TableTile::new("far-x", 2, 0),
            TableTile::new("corner", 0, 0),
            TableTile::new("near-x", 1, 0),
            TableTile::new("near-y", 0, 1),
        ];
        let groups = find_groups(&tiles);
        assert_eq!(ids(&groups), vec![vec!["far-x", "near-x", "corner", "near-y"]]);
    }

    #[test]
    fn test_chain_joined_through_later_tile() {
        // a and c only connect through b, which comes last in input order.
        let tiles = vec![
            TableTile::new("a", 0, 0),
            TableTile::new("c", 2, 0),
            TableTile::new("b", 1, 0),
        ];
        assert_eq!(ids(&find_groups(&tiles)), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(find_groups(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_id_skips_isolated() {
        let mut a = TableTile::new("a", 0, 0);
        let mut b = TableTile::new("b", 1, 0);
        a.group_id = Some("g-1".into());
        b.group_id = Some("g-1".into());
        let plan = FloorPlan::new("p", "Sala", 4, 4).with_tiles(vec![
            a,
            b,
            TableTile::new("c", 3, 3),
        ]);
        let groups = groups_by_id(&plan);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["g-1"].len(), 2);
    }
}
