//! Error system for floor-plan operations
//!
//! - [`ErrorCode`]: numeric codes shared with the clients (7xxx table range)
//! - [`FloorPlanError`]: rejection reasons and invariant violations
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCode, FloorPlanError};
//!
//! let err = FloorPlanError::TileNotFound { tile_id: "t9".into() };
//! assert_eq!(err.code(), ErrorCode::TileNotFound);
//! assert!(err.is_rejection());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{FloorPlanError, FloorPlanResult};
