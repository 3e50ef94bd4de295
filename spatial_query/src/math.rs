//! Integer world math shared by every query.
//!
//! # Model
//! - [`WPos`] is an absolute world position, [`WVec`] a delta between positions.
//! - Units are world sub-cell units; one terrain cell is [`crate::CELL_SIZE`] units wide.
//! - X/Y span the ground plane, Z is height. "Horizontal" means Z is ignored.
//!
//! # Determinism
//! Nothing here touches floating point. Distances stay squared and are computed in `i128`, so
//! they are exact for any pair of `i32` positions. Caller-supplied offsets go through
//! [`saturating_offset`], which pins at the edge of the coordinate space instead of wrapping.

use nalgebra as na;

/// Absolute world position.
pub type WPos = na::Point3<i32>;

/// Delta between two world positions.
pub type WVec = na::Vector3<i32>;

/// Builds a [`WPos`] from components.
#[inline]
pub fn wpos(x: i32, y: i32, z: i32) -> WPos {
    na::Point3::new(x, y, z)
}

/// Builds a [`WVec`] from components.
#[inline]
pub fn wvec(x: i32, y: i32, z: i32) -> WVec {
    na::Vector3::new(x, y, z)
}

/// Non-negative world length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WDist(i32);

impl WDist {
    pub const ZERO: Self = Self(0);

    /// # Panics
    /// Panics if `length` is negative. Negative lengths are a caller bug, not a game state.
    #[inline]
    pub const fn new(length: i32) -> Self {
        assert!(length >= 0, "WDist must be non-negative");
        Self(length)
    }

    /// Returns `None` for negative lengths.
    #[inline]
    pub const fn try_new(length: i32) -> Option<Self> {
        if length < 0 { None } else { Some(Self(length)) }
    }

    #[inline]
    pub const fn length(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn length_squared(self) -> i64 {
        (self.0 as i64) * (self.0 as i64)
    }
}

impl std::ops::Add for WDist {
    type Output = WDist;

    fn add(self, rhs: WDist) -> WDist {
        WDist(self.0.saturating_add(rhs.0))
    }
}

/// `pos + offset`, clamped per component to the `i32` range.
///
/// Offsets come from callers and are not bounded, so a target near the edge of the coordinate
/// space pins to the edge instead of wrapping.
#[inline]
pub fn saturating_offset(pos: WPos, offset: WVec) -> WPos {
    wpos(
        pos.x.saturating_add(offset.x),
        pos.y.saturating_add(offset.y),
        pos.z.saturating_add(offset.z),
    )
}

/// Full 3D squared distance between two positions. Exact for any pair of `i32` positions.
#[inline]
pub fn distance_squared(a: WPos, b: WPos) -> i128 {
    let d = |p: i32, q: i32| {
        let v = p as i128 - q as i128;
        v * v
    };
    d(a.x, b.x) + d(a.y, b.y) + d(a.z, b.z)
}

/// Squared distance over X/Y only. Exact for any pair of `i32` positions.
#[inline]
pub fn horizontal_distance_squared(a: WPos, b: WPos) -> i128 {
    let d = |p: i32, q: i32| {
        let v = p as i128 - q as i128;
        v * v
    };
    d(a.x, b.x) + d(a.y, b.y)
}

/// Returns `-1` for negative values and `1` otherwise.
///
/// Zero maps to `1` so a direction derived from it never collapses an extent to nothing.
#[inline]
pub const fn sign_non_zero(v: i64) -> i32 {
    if v < 0 { -1 } else { 1 }
}

/// Lexicographic `(x, y, z)` key, used wherever positions need a total order.
#[inline]
pub fn lexicographic_key(p: &WPos) -> (i32, i32, i32) {
    (p.x, p.y, p.z)
}
