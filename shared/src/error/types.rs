//! Floor-plan error type

use super::codes::ErrorCode;
use thiserror::Error;

/// Why a floor-plan operation was rejected, or which invariant a plan breaks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlanError {
    /// No module with this id on the plan
    #[error("Table module not found: {tile_id}")]
    TileNotFound { tile_id: String },

    /// Target cell already holds another module
    #[error("Cell ({x}, {y}) is occupied by {occupant}")]
    CellOccupied { x: u32, y: u32, occupant: String },

    /// Every cell of the plan is taken
    #[error("Floor plan is full ({width}x{height})")]
    PlanFull { width: u32, height: u32 },

    #[error("Table module {tile_id} at ({x}, {y}) is outside {width}x{height}")]
    OutOfBounds {
        tile_id: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Table modules {first} and {second} share cell ({x}, {y})")]
    DuplicateCell {
        x: u32,
        y: u32,
        first: String,
        second: String,
    },

    #[error("Duplicate table module id: {tile_id}")]
    DuplicateTileId { tile_id: String },

    /// Group labels or seat counts disagree with the spatial layout
    #[error("Inconsistent group at {tile_id}: {reason}")]
    GroupInconsistent { tile_id: String, reason: String },

    #[error("Invalid floor plan dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl FloorPlanError {
    /// Numeric code shared with the clients
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TileNotFound { .. } => ErrorCode::TileNotFound,
            Self::CellOccupied { .. } => ErrorCode::CellOccupied,
            Self::PlanFull { .. } => ErrorCode::PlanFull,
            Self::OutOfBounds { .. } => ErrorCode::TileOutOfBounds,
            Self::DuplicateCell { .. } => ErrorCode::DuplicateCell,
            Self::DuplicateTileId { .. } => ErrorCode::DuplicateTileId,
            Self::GroupInconsistent { .. } => ErrorCode::GroupInconsistent,
            Self::InvalidDimensions { .. } => ErrorCode::InvalidDimensions,
        }
    }

    /// True for operation rejections (the plan is left unchanged),
    /// false for invariant violations found by validation.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::TileNotFound { .. } | Self::CellOccupied { .. } | Self::PlanFull { .. }
        )
    }

    pub fn group_inconsistent(tile_id: &str, reason: impl Into<String>) -> Self {
        Self::GroupInconsistent {
            tile_id: tile_id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for floor-plan operations
pub type FloorPlanResult<T> = Result<T, FloorPlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_rejections() {
        let occupied = FloorPlanError::CellOccupied {
            x: 1,
            y: 0,
            occupant: "t2".into(),
        };
        assert_eq!(occupied.code(), ErrorCode::CellOccupied);
        assert!(occupied.is_rejection());
        assert_eq!(occupied.to_string(), "Cell (1, 0) is occupied by t2");

        let dup = FloorPlanError::DuplicateTileId {
            tile_id: "t1".into(),
        };
        assert_eq!(dup.code(), ErrorCode::DuplicateTileId);
        assert!(!dup.is_rejection());
    }
}
