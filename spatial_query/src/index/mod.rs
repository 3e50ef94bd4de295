/*!
Spatial actor index seam.

The query layer consumes the index through [`ActorIndex`] only:

- box:    every actor whose center lies inside an axis-aligned box (inclusive)
- circle: every actor whose center lies within a horizontal radius (inclusive)
- maxima: the largest hit-shape radius in the world, overall and among projectile blockers

Callers must treat results as an unordered set. Anything that needs a stable "first" element
sorts by [`crate::ActorId`] itself.

- grid: [`GridActorIndex`], a bucketed uniform grid keyed by actor center
*/

pub mod grid;

pub use grid::GridActorIndex;

use crate::{
    actor::Actor,
    math::{WDist, WPos, horizontal_distance_squared, wpos},
};

pub trait ActorIndex {
    /// Actors whose center lies in the box spanned by `a` and `b`. Corners may come in any
    /// order; height is ignored.
    fn actors_in_box(&self, a: WPos, b: WPos) -> Vec<&Actor>;

    /// Largest hit-shape outer radius over every indexed actor.
    fn largest_actor_radius(&self) -> WDist;

    /// Largest hit-shape outer radius over actors tagged as projectile blockers.
    fn largest_blocking_actor_radius(&self) -> WDist;

    /// Actors whose center lies within `radius` of `origin`, measured horizontally.
    fn actors_in_circle(&self, origin: WPos, radius: WDist) -> Vec<&Actor> {
        let r = radius.length();
        let min = wpos(origin.x.saturating_sub(r), origin.y.saturating_sub(r), origin.z);
        let max = wpos(origin.x.saturating_add(r), origin.y.saturating_add(r), origin.z);
        let r_sq = radius.length_squared() as i128;

        self.actors_in_box(min, max)
            .into_iter()
            .filter(|a| horizontal_distance_squared(a.center, origin) <= r_sq)
            .collect()
    }
}
