use shared::models::{FloorPlan, TableStatus, TableTile};

use crate::regroup::normalize;

pub const DEFAULT_GRID_COLS: u32 = 12;
pub const DEFAULT_GRID_ROWS: u32 = 8;
pub const DEFAULT_CELL_SIZE: u32 = 32;

/// Engine configuration, read from the environment
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Width of new and demo plans (FLOOR_GRID_COLS)
    pub grid_cols: u32,
    /// Height of new and demo plans (FLOOR_GRID_ROWS)
    pub grid_rows: u32,
    /// Render cell size in px, passed through to the clients (FLOOR_CELL_SIZE)
    pub cell_size: u32,
    /// Demo plan name (FLOOR_PLAN_NAME)
    pub plan_name: String,
    /// Fallback log filter when RUST_LOG is unset (LOG_LEVEL)
    pub log_level: String,
    /// JSON log lines instead of plain text (LOG_JSON)
    pub log_json: bool,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            grid_cols: std::env::var("FLOOR_GRID_COLS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_GRID_COLS),
            grid_rows: std::env::var("FLOOR_GRID_ROWS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_GRID_ROWS),
            cell_size: std::env::var("FLOOR_CELL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CELL_SIZE),
            plan_name: std::env::var("FLOOR_PLAN_NAME").unwrap_or_else(|_| "Sala Principale".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Empty plan with the configured dimensions
    pub fn empty_plan(&self, id: impl Into<String>) -> FloorPlan {
        FloorPlan::new(id, self.plan_name.clone(), self.grid_cols, self.grid_rows)
    }

    /// Seeded plan: a row of three free modules and one reserved module,
    /// regrouped so labels and seats are consistent.
    ///
    /// Seed positions are dropped when they fall outside a smaller
    /// configured grid.
    pub fn demo_plan(&self) -> FloorPlan {
        let seed = [
            TableTile::new("t1", 2, 2),
            TableTile::new("t2", 3, 2),
            TableTile::new("t3", 4, 2),
            TableTile::new("t4", 6, 4).with_status(TableStatus::Reserved),
        ];
        let plan = self.empty_plan("demo-plan-1");
        let tiles = seed
            .into_iter()
            .filter(|t| plan.contains(t.x, t.y))
            .collect();
        normalize(plan.with_tiles(tiles))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_cols: DEFAULT_GRID_COLS,
            grid_rows: DEFAULT_GRID_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            plan_name: "Sala Principale".into(),
            log_level: "info".into(),
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::validate;
    use crate::summary::summarize;

    #[test]
    fn test_demo_plan() {
        let plan = EngineConfig::default().demo_plan();
        assert_eq!(plan.name, "Sala Principale");
        assert_eq!((plan.width, plan.height), (12, 8));
        assert_eq!(validate(&plan), Ok(()));

        let t1 = plan.tile("t1").unwrap();
        assert_eq!(t1.seats, 8);
        assert!(t1.group_id.is_some());
        let t4 = plan.tile("t4").unwrap();
        assert_eq!(t4.status, TableStatus::Reserved);
        assert!(t4.group_id.is_none());

        assert_eq!(summarize(&plan).total_seats, 10);
    }

    #[test]
    fn test_demo_plan_on_small_grid() {
        let config = EngineConfig {
            grid_cols: 4,
            grid_rows: 3,
            ..EngineConfig::default()
        };
        let plan = config.demo_plan();
        assert_eq!(plan.tiles.len(), 2);
        assert_eq!(validate(&plan), Ok(()));
    }
}
