//! Table Module Model

use serde::{Deserialize, Serialize};

/// Seats carried by one isolated table module
pub const MODULE_SEATS: u32 = 2;

/// Occupancy state of a table module (libero / prenotato / occupato)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Free,
    Reserved,
    Occupied,
}

impl TableStatus {
    /// Next state of the tap cycle: free → reserved → occupied → free
    pub const fn next(self) -> Self {
        match self {
            Self::Free => Self::Reserved,
            Self::Reserved => Self::Occupied,
            Self::Occupied => Self::Free,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit-cell table placed on the floor-plan grid
///
/// Adjacent modules form a combined table (a group). Only the group head
/// carries the group's seat count; the other members carry 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableTile {
    pub id: String,
    /// Grid column
    pub x: u32,
    /// Grid row
    pub y: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub seats: u32,
    #[serde(default)]
    pub status: TableStatus,
}

impl TableTile {
    /// New isolated module: free, two seats, no group
    pub fn new(id: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            group_id: None,
            seats: MODULE_SEATS,
            status: TableStatus::Free,
        }
    }

    pub fn with_status(mut self, status: TableStatus) -> Self {
        self.status = status;
        self
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// True when the two modules share a grid edge (not a corner)
    pub fn is_adjacent(&self, other: &TableTile) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle() {
        assert_eq!(TableStatus::Free.next(), TableStatus::Reserved);
        assert_eq!(TableStatus::Reserved.next(), TableStatus::Occupied);
        assert_eq!(TableStatus::Occupied.next(), TableStatus::Free);
    }

    #[test]
    fn test_adjacency_is_edge_only() {
        let a = TableTile::new("a", 3, 3);
        assert!(a.is_adjacent(&TableTile::new("b", 4, 3)));
        assert!(a.is_adjacent(&TableTile::new("c", 3, 2)));
        assert!(!a.is_adjacent(&TableTile::new("d", 4, 4)));
        assert!(!a.is_adjacent(&TableTile::new("e", 5, 3)));
        assert!(!a.is_adjacent(&TableTile::new("f", 3, 3)));
    }

    #[test]
    fn test_wire_format() {
        let mut tile = TableTile::new("t1", 2, 2).with_status(TableStatus::Reserved);
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "t1", "x": 2, "y": 2, "seats": 2, "status": "reserved"})
        );

        tile.group_id = Some("g1".into());
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(json["groupId"], "g1");

        let parsed: TableTile =
            serde_json::from_str(r#"{"id":"t4","x":6,"y":4,"seats":2,"status":"occupied","groupId":"g2"}"#)
                .unwrap();
        assert_eq!(parsed.status, TableStatus::Occupied);
        assert_eq!(parsed.group_id.as_deref(), Some("g2"));
    }
}
