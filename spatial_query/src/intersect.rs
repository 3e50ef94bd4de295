//! Line and circle intersection queries against actor bodies.
//!
//! Both queries run a broad phase against the spatial index first. The line query then
//! confirms every candidate with an exact integer distance test; the circle query does not
//! (see [`actors_on_circle`]).
//!
//! Results are sorted by [`crate::ActorId`] before they are returned, so callers that iterate
//! them (damage application, vision updates) see the same order on every peer.

use log::{debug, trace};

use crate::{
    actor::Actor,
    index::ActorIndex,
    math::{WDist, WPos, horizontal_distance_squared, sign_non_zero, wpos},
    pathfinder::PathOracle,
    projection::minimum_point_line_projection,
    world::QueryWorld,
};

/// Actors whose body intersects the segment `start..end` widened by `width` on each side.
///
/// Broad phase: a box from `start` to `end`, pushed outward on both ends by the line overscan,
/// the line width and the largest relevant actor radius. With `blockers_only` the radius is
/// the largest among projectile blockers, which only shrinks the box; returned actors are
/// *not* filtered by that tag.
///
/// Narrow phase: an actor intersects iff the horizontal distance from its center to the
/// segment is at most its body radius plus `width` (boundary inclusive). The comparison is on
/// exact squared values, so a distance of `sqrt(reach² + 1)` misses even though its floor
/// equals `reach`.
///
/// The box corners are clamped to the `i32` range, so any width or overscan is accepted.
pub fn actors_on_line<'w, I, P>(
    world: &'w QueryWorld<I, P>,
    start: WPos,
    end: WPos,
    width: WDist,
    blockers_only: bool,
) -> Vec<&'w Actor>
where
    I: ActorIndex,
    P: PathOracle,
{
    let index = world.index();

    // Never zero along an axis, otherwise an axis-aligned line would get no overscan there.
    let x_dir = sign_non_zero(end.x as i64 - start.x as i64);
    let y_dir = sign_non_zero(end.y as i64 - start.y as i64);

    let largest_radius = if blockers_only {
        index.largest_blocking_actor_radius()
    } else {
        index.largest_actor_radius()
    };
    let overscan = world
        .settings()
        .line_overscan
        .saturating_add(width.length())
        .saturating_add(largest_radius.length());
    let (over_x, over_y) = (x_dir * overscan, y_dir * overscan);
    let box_start = wpos(
        start.x.saturating_sub(over_x),
        start.y.saturating_sub(over_y),
        start.z,
    );
    let box_end = wpos(end.x.saturating_add(over_x), end.y.saturating_add(over_y), end.z);

    if start.x == end.x && start.y == end.y {
        debug!("actors_on_line: zero-length segment at {start:?}");
    }

    let candidates = index.actors_in_box(box_start, box_end);
    let candidate_count = candidates.len();

    let mut hits: Vec<&Actor> = candidates
        .into_iter()
        .filter(|actor| {
            let projection = minimum_point_line_projection(start, end, actor.center);
            let distance_sq = horizontal_distance_squared(actor.center, projection);
            let max_reach = actor.body_radius() + width;
            distance_sq <= max_reach.length_squared() as i128
        })
        .collect();
    hits.sort_by_key(|a| a.id);

    trace!(
        "actors_on_line: {} of {candidate_count} candidates hit",
        hits.len()
    );
    hits
}

/// Actors near a circle of `radius` around `origin`.
///
/// This is an approximation: the index is asked for actor *centers* within
/// `radius + largest actor radius`, with no per-actor shape test. Every actor whose body can
/// touch the circle is returned, but so may some whose body falls just short of it.
pub fn actors_on_circle<'w, I, P>(
    world: &'w QueryWorld<I, P>,
    origin: WPos,
    radius: WDist,
) -> Vec<&'w Actor>
where
    I: ActorIndex,
    P: PathOracle,
{
    let index = world.index();
    let mut found = index.actors_in_circle(origin, radius + index.largest_actor_radius());
    found.sort_by_key(|a| a.id);
    found
}
