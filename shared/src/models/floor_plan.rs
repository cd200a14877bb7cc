//! Floor Plan Model

use std::collections::HashSet;

use super::table_tile::TableTile;
use serde::{Deserialize, Serialize};

/// A room layout: a `width × height` grid and the table modules placed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tiles: Vec<TableTile>,
}

impl FloorPlan {
    /// Empty plan
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            tiles: Vec::new(),
        }
    }

    pub fn with_tiles(mut self, tiles: Vec<TableTile>) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn tile(&self, tile_id: &str) -> Option<&TableTile> {
        self.tiles.iter().find(|t| t.id == tile_id)
    }

    pub fn tile_at(&self, x: u32, y: u32) -> Option<&TableTile> {
        self.tiles.iter().find(|t| t.x == x && t.y == y)
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// First unoccupied cell scanning rows top to bottom, columns left to right
    pub fn first_free_cell(&self) -> Option<(u32, u32)> {
        let occupied: HashSet<(u32, u32)> = self.tiles.iter().map(TableTile::position).collect();
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .find(|cell| !occupied.contains(cell))
    }

    /// True when no cell inside the plan is free
    pub fn is_full(&self) -> bool {
        self.first_free_cell().is_none()
    }
}

/// Header figures shown above the plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub tile_count: usize,
    pub total_seats: u32,
    pub group_count: usize,
    pub free: usize,
    pub reserved: usize,
    pub occupied: usize,
}
