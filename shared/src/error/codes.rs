//! Error codes for the floor-plan workspace
//!
//! All codes live in the 7xxx "table errors" range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Represented as u16 values for serialization and cross-language
/// compatibility with the TypeScript clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 7xxx: Table ====================
    /// Table module not found
    TileNotFound = 7001,
    /// Target cell is occupied by another module
    CellOccupied = 7002,
    /// No free cell left on the plan
    PlanFull = 7003,
    /// Module placed outside the plan bounds
    TileOutOfBounds = 7004,
    /// Two modules share one cell
    DuplicateCell = 7005,
    /// Two modules share one id
    DuplicateTileId = 7006,
    /// Group labels or seat counts disagree with the layout
    GroupInconsistent = 7007,
    /// Plan width or height is zero
    InvalidDimensions = 7008,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::TileNotFound => "Table module not found",
            ErrorCode::CellOccupied => "Cell is occupied by another module",
            ErrorCode::PlanFull => "Floor plan has no free cell",
            ErrorCode::TileOutOfBounds => "Table module is outside the floor plan",
            ErrorCode::DuplicateCell => "Two table modules share a cell",
            ErrorCode::DuplicateTileId => "Two table modules share an id",
            ErrorCode::GroupInconsistent => "Table groups do not match the layout",
            ErrorCode::InvalidDimensions => "Floor plan dimensions must be positive",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            7001 => Ok(ErrorCode::TileNotFound),
            7002 => Ok(ErrorCode::CellOccupied),
            7003 => Ok(ErrorCode::PlanFull),
            7004 => Ok(ErrorCode::TileOutOfBounds),
            7005 => Ok(ErrorCode::DuplicateCell),
            7006 => Ok(ErrorCode::DuplicateTileId),
            7007 => Ok(ErrorCode::GroupInconsistent),
            7008 => Ok(ErrorCode::InvalidDimensions),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
