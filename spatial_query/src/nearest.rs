//! Straight-line "closest" selection.
//!
//! Everything here ranks by squared distance only; no square roots and no path cost. Ties are
//! broken by a total order on the candidates themselves (lowest [`crate::ActorId`] for actors,
//! lexicographic `(x, y, z)` for positions), so the winner never depends on iteration order.

use crate::{
    actor::Actor,
    math::{WPos, distance_squared, lexicographic_key},
};

/// Picks the actor with the smallest key, breaking ties by lowest id.
pub fn closest_by_key<'a, K: Ord>(
    items: impl IntoIterator<Item = (&'a Actor, K)>,
) -> Option<&'a Actor> {
    items
        .into_iter()
        .min_by(|(a, ka), (b, kb)| (ka, a.id).cmp(&(kb, b.id)))
        .map(|(actor, _)| actor)
}

/// Closest actor center to `origin` by 3D squared distance.
pub fn closest_actor_ignoring_path<'a>(
    actors: impl IntoIterator<Item = &'a Actor>,
    origin: WPos,
) -> Option<&'a Actor> {
    closest_by_key(
        actors
            .into_iter()
            .map(|a| (a, distance_squared(a.center, origin))),
    )
}

/// Closest position to `origin` by 3D squared distance.
pub fn closest_position_ignoring_path(
    positions: impl IntoIterator<Item = WPos>,
    origin: WPos,
) -> Option<WPos> {
    positions
        .into_iter()
        .min_by_key(|p| (distance_squared(*p, origin), lexicographic_key(p)))
}
