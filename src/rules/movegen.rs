use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::error::SearchError;

/// All 8 knight destinations from `from`, in [`KNIGHT_STEPS`] order.
///
/// No board is consulted: destinations may lie off the grid or on forbidden cells.
/// Fails only when a destination is not representable as an `i32` pair.
#[inline]
pub fn knight_moves(from: Coord) -> Result<[Coord; 8], SearchError> {
    let mut out = [from; 8];
    for (slot, step) in out.iter_mut().zip(KNIGHT_STEPS) {
        *slot = from
            .checked_add(step)
            .ok_or(SearchError::CoordinateOverflow { cell: from })?;
    }
    Ok(out)
}

/// A single knight move by 1-based direction number (`1..=8`, [`KNIGHT_STEPS`] order).
pub fn knight_move(from: Coord, direction: u8) -> Result<Coord, SearchError> {
    if !(1..=8).contains(&direction) {
        return Err(SearchError::InvalidDirection { direction });
    }
    from.checked_add(KNIGHT_STEPS[(direction - 1) as usize])
        .ok_or(SearchError::CoordinateOverflow { cell: from })
}

#[inline]
pub fn is_knight_step(from: Coord, to: Coord) -> bool {
    from.is_knight_step_to(to)
}
