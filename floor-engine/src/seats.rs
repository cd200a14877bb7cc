//! Seat capacity of a combined table
//!
//! Capacity approximates people seated around the bounding rectangle of the
//! group, never below two per module. The two-module row or column is fixed
//! at six seats.

use shared::models::{MODULE_SEATS, TableTile};

/// Seats of a two-module row (2×1) or column (1×2)
pub const PAIR_SEATS: u32 = 6;

/// Axis-aligned rectangle enclosing a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// `None` for an empty group
    pub fn of<'a>(group: impl IntoIterator<Item = &'a TableTile>) -> Option<Self> {
        let mut iter = group.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for tile in iter {
            min_x = min_x.min(tile.x);
            max_x = max_x.max(tile.x);
            min_y = min_y.min(tile.y);
            max_y = max_y.max(tile.y);
        }
        Some(Self {
            min_x,
            min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!((self.width, self.height), (2, 1) | (1, 2))
    }
}

/// Total seats of one group.
///
/// Uses the bounding box, not the true outline, so concave shapes (an L of
/// three modules) are counted as their enclosing rectangle.
pub fn compute_group_seats(group: &[&TableTile]) -> u32 {
    if group.len() <= 1 {
        return MODULE_SEATS * group.len() as u32;
    }

    let Some(bbox) = BoundingBox::of(group.iter().copied()) else {
        return 0;
    };

    if bbox.is_pair() {
        return PAIR_SEATS;
    }

    let long_side = bbox.width.max(bbox.height);
    let short_side = bbox.width.min(bbox.height);
    let perimeter_seats = long_side * 2 + short_side * 2;
    let min_seats = group.len() as u32 * MODULE_SEATS;

    perimeter_seats.max(min_seats)
}
