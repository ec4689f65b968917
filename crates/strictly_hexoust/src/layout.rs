//! Coordinate generation for hexagon-shaped boards.
//!
//! The engine accepts any finite set of cells; this is the shape the game is
//! normally played on.

use crate::coordinate::HexCoordinate;
use crate::error::EngineError;
use tracing::{instrument, warn};

/// Default board radius: 127 cells.
pub const DEFAULT_RADIUS: u32 = 6;

/// Largest radius a hexagon board may have: 3,003,001 cells.
pub const MAX_RADIUS: u32 = 1000;

/// All coordinates within `radius` steps of the origin.
///
/// Ordered by `q` ascending, then `r` ascending, so cell ids are stable for a
/// given radius.
///
/// # Errors
///
/// [`EngineError::RadiusTooLarge`] above [`MAX_RADIUS`].
#[instrument]
pub fn hexagon(radius: u32) -> Result<Vec<HexCoordinate>, EngineError> {
    let Some(count) = cell_count(radius).filter(|_| radius <= MAX_RADIUS) else {
        warn!(radius, max = MAX_RADIUS, "Board radius out of range");
        return Err(EngineError::RadiusTooLarge {
            radius,
            max: MAX_RADIUS,
        });
    };

    let n = i32::try_from(radius).map_err(|_| EngineError::RadiusTooLarge {
        radius,
        max: MAX_RADIUS,
    })?;
    let mut coordinates = Vec::with_capacity(count);
    for q in -n..=n {
        for r in (-n).max(-q - n)..=n.min(-q + n) {
            coordinates.push(HexCoordinate::axial(q, r));
        }
    }
    Ok(coordinates)
}

/// Number of cells on a hexagon board of `radius`, or `None` on overflow.
pub fn cell_count(radius: u32) -> Option<usize> {
    let r = usize::try_from(radius).ok()?;
    r.checked_add(1)?
        .checked_mul(r)?
        .checked_mul(3)?
        .checked_add(1)
}
