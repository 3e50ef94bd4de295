//! Exact integer point-to-segment projection.

use crate::math::{WPos, wpos};

/// Integer linear interpolation `a + (b - a) * mul / div`, per component.
///
/// The product is taken in `i128` and divided once at the end, truncating toward zero, so the
/// result is identical on every platform.
///
/// # Panics
/// Panics if `div` is zero.
#[inline]
pub fn lerp(a: WPos, b: WPos, mul: i128, div: i128) -> WPos {
    let axis = |from: i32, to: i32| -> i32 {
        let delta = to as i128 - from as i128;
        (from as i128 + delta * mul / div) as i32
    };
    wpos(axis(a.x, b.x), axis(a.y, b.y), axis(a.z, b.z))
}

/// Returns the point on the segment `line_start..line_end` nearest to `point`.
///
/// The projection is horizontal: the dot product and segment length ignore Z. The result is
/// clamped to the segment ends, and a segment with zero horizontal length returns `line_end`.
///
/// The segment is parameterized from the end toward the start:
/// `line_end + t * (line_start - line_end)` with
/// `t = (point - line_end) . (line_start - line_end) / |line_start - line_end|^2`.
/// The division is deferred to [`lerp`] so nothing is rounded until the very last step.
pub fn minimum_point_line_projection(line_start: WPos, line_end: WPos, point: WPos) -> WPos {
    let wide = |v: i32| v as i128;
    let (dx, dy) = (
        wide(line_start.x) - wide(line_end.x),
        wide(line_start.y) - wide(line_end.y),
    );
    let squared_length = dx * dx + dy * dy;
    if squared_length == 0 {
        return line_end;
    }

    let t = (wide(point.x) - wide(line_end.x)) * dx + (wide(point.y) - wide(line_end.y)) * dy;

    // Past the end of the segment.
    if t < 0 {
        return line_end;
    }

    // Past the start of the segment.
    if t > squared_length {
        return line_start;
    }

    lerp(line_end, line_start, t, squared_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_point_projects_onto_the_segment() {
        let s = wpos(0, 0, 0);
        let e = wpos(10, 0, 0);
        assert_eq!(minimum_point_line_projection(s, e, wpos(5, 5, 0)), wpos(5, 0, 0));
    }

    #[test]
    fn points_beyond_the_ends_clamp() {
        let s = wpos(0, 0, 0);
        let e = wpos(10, 0, 0);
        assert_eq!(minimum_point_line_projection(s, e, wpos(-5, 0, 0)), s);
        assert_eq!(minimum_point_line_projection(s, e, wpos(15, 0, 0)), e);
    }

    #[test]
    fn zero_length_segment_returns_the_end() {
        let p = wpos(3, 3, 0);
        for point in [wpos(0, 0, 0), wpos(3, 3, 0), wpos(-100, 42, 7)] {
            assert_eq!(minimum_point_line_projection(p, p, point), p);
        }

        // Only the height differs: still degenerate horizontally.
        let top = wpos(3, 3, 50);
        assert_eq!(minimum_point_line_projection(p, top, wpos(9, 9, 0)), top);
    }

    #[test]
    fn diagonal_projection_is_exact() {
        let s = wpos(0, 0, 0);
        let e = wpos(1024, 1024, 0);
        assert_eq!(minimum_point_line_projection(s, e, wpos(1024, 0, 0)), wpos(512, 512, 0));
    }

    #[test]
    fn projection_interpolates_height() {
        let s = wpos(0, 0, 0);
        let e = wpos(100, 0, 200);
        assert_eq!(minimum_point_line_projection(s, e, wpos(25, 40, 0)), wpos(25, 0, 50));
    }

    #[test]
    fn lerp_truncates_toward_zero() {
        // 10 * 1 / 3 = 3.33 -> 3; -10 * 1 / 3 = -3.33 -> -3.
        assert_eq!(lerp(wpos(0, 0, 0), wpos(10, -10, 0), 1, 3), wpos(3, -3, 0));
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let s = wpos(-1_000_000_000, 0, 0);
        let e = wpos(1_000_000_000, 0, 0);
        assert_eq!(
            minimum_point_line_projection(s, e, wpos(123_456_789, 999_999_999, 0)),
            wpos(123_456_789, 0, 0)
        );
    }
}
