//! Terrain cell quantization helpers.
//!
//! This module centralizes the world-to-cell mapping so every caller (reachability checks, the
//! bucketed actor index) quantizes positions the same way on every platform.
//!
//! # Model
//! - [`CellPos`] identifies one square terrain cell by signed grid coordinates.
//! - A cell is `cell_size` world units wide (see [`crate::CELL_SIZE`]).
//! - Only X/Y take part; height never changes the containing cell.
//!
//! # Encoding
//! We compute grid coords with floor division:
//! - `cx = floor(x / cell_size)`
//! - `cy = floor(y / cell_size)`
//!
//! `div_euclid` gives floor semantics for a positive divisor, so `-1` lands in cell `-1`
//! rather than truncating toward zero into cell `0`.

use crate::math::{WPos, wpos};

/// Grid coordinates of a terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Returns the cell containing `pos`.
///
/// # Panics
/// Panics if `cell_size` is not positive. [`crate::QuerySettings::validate`] rejects such
/// settings before they reach a query.
#[inline]
pub fn cell_containing(pos: WPos, cell_size: i32) -> CellPos {
    assert!(cell_size > 0, "cell_size must be positive");
    CellPos::new(pos.x.div_euclid(cell_size), pos.y.div_euclid(cell_size))
}

/// Returns the inclusive cell range `(min, max)` covering the box spanned by `a` and `b`.
///
/// The corners may be given in any order.
#[inline]
pub fn cell_span(a: WPos, b: WPos, cell_size: i32) -> (CellPos, CellPos) {
    let min = wpos(a.x.min(b.x), a.y.min(b.y), 0);
    let max = wpos(a.x.max(b.x), a.y.max(b.y), 0);
    (
        cell_containing(min, cell_size),
        cell_containing(max, cell_size),
    )
}
