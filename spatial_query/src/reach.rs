//! Path-gated reachability filters and the nearest-reachable selectors built on them.
//!
//! Reachability asks the path oracle whether terrain allows a path; actors never block. The
//! source's [`Mobility`] is matched once per query:
//! - `Flying`: everything is reachable and the oracle is never consulted.
//! - `Grounded(locomotor)`: one oracle call per (candidate, offset) pair.
//! - no mobility: nothing is reachable.
//!
//! Selection is deliberately asymmetric: candidates are *gated* by path existence but *ranked*
//! by straight-line squared distance. Path length never enters the ranking.

use log::{debug, trace};

use crate::{
    actor::{Actor, Mobility},
    index::ActorIndex,
    math::{WPos, WVec, distance_squared, saturating_offset},
    nearest::{closest_actor_ignoring_path, closest_by_key, closest_position_ignoring_path},
    pathfinder::PathOracle,
    world::QueryWorld,
};

/// A candidate that passed the filter, with the offsets that were accepted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable<'a> {
    pub actor: &'a Actor,
    /// Accepted offsets relative to `actor.center`, in the order the offset function gave them.
    pub offsets: Vec<WVec>,
}

/// Filters `candidates` down to those `source` can reach over terrain.
///
/// `offsets` maps each candidate to the target offsets (relative to its center) that are
/// acceptable destinations. A destination past the edge of the coordinate space is clamped to
/// the edge before it is quantized. A grounded source keeps a candidate when at least one offset is
/// reachable and reports exactly those offsets. A flying source gets every candidate back with
/// its offsets unmodified. Candidate order is preserved.
pub fn reachable_from<'a, I, P, F>(
    world: &QueryWorld<I, P>,
    source: &Actor,
    candidates: impl IntoIterator<Item = &'a Actor>,
    mut offsets: F,
) -> Vec<Reachable<'a>>
where
    I: ActorIndex,
    P: PathOracle,
    F: FnMut(&Actor) -> Vec<WVec>,
{
    let candidates = candidates.into_iter();
    match source.mobility {
        Some(Mobility::Flying) => candidates
            .map(|actor| Reachable {
                actor,
                offsets: offsets(actor),
            })
            .collect(),
        Some(Mobility::Grounded(locomotor)) => {
            let from = world.cell_containing(source.center);
            let reachable: Vec<Reachable<'a>> = candidates
                .filter_map(|actor| {
                    let accepted: Vec<WVec> = offsets(actor)
                        .into_iter()
                        .filter(|&offset| {
                            let target = saturating_offset(actor.center, offset);
                            let to = world.cell_containing(target);
                            world.pathfinder().path_exists(locomotor, from, to)
                        })
                        .collect();
                    (!accepted.is_empty()).then_some(Reachable {
                        actor,
                        offsets: accepted,
                    })
                })
                .collect();
            trace!(
                "reachable_from {:?}: {} candidates reachable",
                source.id,
                reachable.len()
            );
            reachable
        }
        None => {
            debug!("reachable_from {:?}: source has no locomotor", source.id);
            Vec::new()
        }
    }
}

/// Filters raw positions down to those `source` can reach over terrain.
pub fn reachable_positions_from<I, P>(
    world: &QueryWorld<I, P>,
    source: &Actor,
    positions: impl IntoIterator<Item = WPos>,
) -> Vec<WPos>
where
    I: ActorIndex,
    P: PathOracle,
{
    let positions = positions.into_iter();
    match source.mobility {
        Some(Mobility::Flying) => positions.collect(),
        Some(Mobility::Grounded(locomotor)) => {
            let from = world.cell_containing(source.center);
            positions
                .filter(|&pos| {
                    world
                        .pathfinder()
                        .path_exists(locomotor, from, world.cell_containing(pos))
                })
                .collect()
        }
        None => {
            debug!(
                "reachable_positions_from {:?}: source has no locomotor",
                source.id
            );
            Vec::new()
        }
    }
}

/// The reachable candidate closest to `source`.
///
/// Each candidate is scored by its closest *accepted* offset. `None` for `offsets` means the
/// candidate's center is the only destination. Ties go to the lowest actor id.
pub fn nearest_reachable_from<'a, I, P, F>(
    world: &QueryWorld<I, P>,
    source: &Actor,
    candidates: impl IntoIterator<Item = &'a Actor>,
    offsets: Option<F>,
) -> Option<&'a Actor>
where
    I: ActorIndex,
    P: PathOracle,
    F: FnMut(&Actor) -> Vec<WVec>,
{
    let reachable = match offsets {
        Some(offsets) => reachable_from(world, source, candidates, offsets),
        None => reachable_from(world, source, candidates, |_: &Actor| vec![WVec::zeros()]),
    };

    closest_by_key(reachable.iter().filter_map(|r| {
        r.offsets
            .iter()
            .map(|&offset| {
                distance_squared(saturating_offset(r.actor.center, offset), source.center)
            })
            .min()
            .map(|key| (r.actor, key))
    }))
}

/// The reachable position closest to `source`. Ties go to the lexicographically smallest.
pub fn nearest_reachable_position_from<I, P>(
    world: &QueryWorld<I, P>,
    source: &Actor,
    positions: impl IntoIterator<Item = WPos>,
) -> Option<WPos>
where
    I: ActorIndex,
    P: PathOracle,
{
    closest_position_ignoring_path(
        reachable_positions_from(world, source, positions),
        source.center,
    )
}

/// Filters `candidates` down to those that can reach `target` themselves.
///
/// Each candidate is its own source: flying candidates always pass, grounded ones ask the
/// oracle once, and candidates without a locomotor never pass.
pub fn reachable_to<'a, I, P>(
    world: &QueryWorld<I, P>,
    candidates: impl IntoIterator<Item = &'a Actor>,
    target: WPos,
) -> Vec<&'a Actor>
where
    I: ActorIndex,
    P: PathOracle,
{
    let to = world.cell_containing(target);
    candidates
        .into_iter()
        .filter(|actor| match actor.mobility {
            Some(Mobility::Flying) => true,
            Some(Mobility::Grounded(locomotor)) => {
                let from = world.cell_containing(actor.center);
                world.pathfinder().path_exists(locomotor, from, to)
            }
            None => false,
        })
        .collect()
}

/// The candidate closest to `target` among those that can reach it. Ties go to the lowest id.
pub fn nearest_reachable_to<'a, I, P>(
    world: &QueryWorld<I, P>,
    candidates: impl IntoIterator<Item = &'a Actor>,
    target: WPos,
) -> Option<&'a Actor>
where
    I: ActorIndex,
    P: PathOracle,
{
    closest_actor_ignoring_path(reachable_to(world, candidates, target), target)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        CELL_SIZE,
        actor::{ActorId, LocomotorId},
        cell::CellPos,
        index::GridActorIndex,
        math::{wpos, wvec},
        pathfinder::{DomainId, DomainPathOracle},
        settings::QuerySettings,
    };

    const TRACKED: LocomotorId = LocomotorId(3);

    /// Cells x < 10 form one island, x >= 10 another.
    fn split_world() -> QueryWorld<GridActorIndex, DomainPathOracle> {
        let settings = QuerySettings::default();
        let mut oracle = DomainPathOracle::new();
        oracle.fill_domain(TRACKED, CellPos::new(-20, -20), CellPos::new(9, 20), DomainId(1));
        oracle.fill_domain(TRACKED, CellPos::new(10, -20), CellPos::new(40, 20), DomainId(2));
        QueryWorld::new(settings, GridActorIndex::new(&settings), oracle).unwrap()
    }

    fn cell_pos(cx: i32, cy: i32) -> WPos {
        wpos(cx * CELL_SIZE + CELL_SIZE / 2, cy * CELL_SIZE + CELL_SIZE / 2, 0)
    }

    fn unit(id: u32, cx: i32, cy: i32) -> Actor {
        Actor::new(ActorId(id), cell_pos(cx, cy)).with_mobility(Mobility::Grounded(TRACKED))
    }

    fn ids(actors: &[&Actor]) -> Vec<u32> {
        actors.iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn grounded_source_keeps_only_reachable_offsets() {
        let world = split_world();
        let source = unit(1, 0, 0);
        let near = Actor::new(ActorId(2), cell_pos(8, 0));
        let across = Actor::new(ActorId(3), cell_pos(12, 0));

        let one_cell_east = wvec(CELL_SIZE, 0, 0);
        let result = reachable_from(&world, &source, [&near, &across], |_| {
            vec![WVec::zeros(), one_cell_east, wvec(CELL_SIZE * 3, 0, 0)]
        });

        // `near` at cell 8: offsets land in cells 8, 9, 11 -> 11 is across the water.
        // `across` at cell 12: every offset stays on the far island.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].actor.id, ActorId(2));
        assert_eq!(result[0].offsets, vec![WVec::zeros(), one_cell_east]);
    }

    #[test]
    fn flying_source_never_asks_the_oracle() {
        let calls = Cell::new(0u32);
        let spy = |_: LocomotorId, _: CellPos, _: CellPos| {
            calls.set(calls.get() + 1);
            false
        };
        let settings = QuerySettings::default();
        let world = QueryWorld::new(settings, GridActorIndex::new(&settings), spy).unwrap();

        let source = Actor::new(ActorId(1), cell_pos(0, 0)).with_mobility(Mobility::Flying);
        let a = Actor::new(ActorId(2), cell_pos(5, 5));
        let b = Actor::new(ActorId(3), cell_pos(-5, 5));

        let result = reachable_from(&world, &source, [&a, &b], |actor| {
            if actor.id == ActorId(2) {
                vec![wvec(1, 2, 3), wvec(4, 5, 6)]
            } else {
                vec![]
            }
        });

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].offsets, vec![wvec(1, 2, 3), wvec(4, 5, 6)]);
        assert!(result[1].offsets.is_empty());

        let positions = reachable_positions_from(&world, &source, [cell_pos(1, 1), cell_pos(2, 2)]);
        assert_eq!(positions, vec![cell_pos(1, 1), cell_pos(2, 2)]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn source_without_locomotor_reaches_nothing() {
        let world = split_world();
        let building = Actor::new(ActorId(1), cell_pos(0, 0));
        let target = Actor::new(ActorId(2), cell_pos(1, 0));

        assert!(reachable_from(&world, &building, [&target], |_| vec![WVec::zeros()]).is_empty());
        assert!(reachable_positions_from(&world, &building, [cell_pos(1, 0)]).is_empty());
        assert_eq!(
            nearest_reachable_position_from(&world, &building, [cell_pos(1, 0)]),
            None
        );
    }

    #[test]
    fn nearest_is_ranked_by_distance_not_path() {
        let world = split_world();
        let source = unit(1, 9, 0);
        // Straight-line closest, but across the water.
        let across = Actor::new(ActorId(2), cell_pos(10, 0));
        let far = Actor::new(ActorId(3), cell_pos(0, 0));
        let farther = Actor::new(ActorId(4), cell_pos(-5, 0));

        let best = nearest_reachable_from(
            &world,
            &source,
            [&farther, &across, &far],
            None::<fn(&Actor) -> Vec<WVec>>,
        );
        assert_eq!(best.map(|a| a.id), Some(ActorId(3)));
    }

    #[test]
    fn nearest_scores_candidates_by_their_closest_accepted_offset() {
        let world = split_world();
        let source = unit(1, 0, 0);
        let a = Actor::new(ActorId(2), cell_pos(6, 0));
        let b = Actor::new(ActorId(3), cell_pos(4, 0));

        // `a` offers a spot right next to the source; `b` only its own center.
        let best = nearest_reachable_from(
            &world,
            &source,
            [&b, &a],
            Some(|actor: &Actor| {
                if actor.id == ActorId(2) {
                    vec![wvec(-5 * CELL_SIZE, 0, 0)]
                } else {
                    vec![WVec::zeros()]
                }
            }),
        );
        assert_eq!(best.map(|a| a.id), Some(ActorId(2)));
    }

    #[test]
    fn nearest_ties_go_to_the_lowest_id() {
        let world = split_world();
        let source = unit(1, 0, 0);
        let east = Actor::new(ActorId(8), cell_pos(2, 0));
        let west = Actor::new(ActorId(5), cell_pos(-2, 0));

        for order in [[&east, &west], [&west, &east]] {
            let best = nearest_reachable_from(&world, &source, order, None::<fn(&Actor) -> Vec<WVec>>);
            assert_eq!(best.map(|a| a.id), Some(ActorId(5)));
        }
    }

    #[test]
    fn nearest_is_none_when_nothing_is_reachable() {
        let world = split_world();
        let source = unit(1, 0, 0);
        let across = Actor::new(ActorId(2), cell_pos(15, 0));
        assert_eq!(
            nearest_reachable_from(&world, &source, [&across], None::<fn(&Actor) -> Vec<WVec>>),
            None
        );
        assert_eq!(
            nearest_reachable_from(&world, &source, [], None::<fn(&Actor) -> Vec<WVec>>),
            None
        );
    }

    #[test]
    fn nearest_position_filters_then_ranks() {
        let world = split_world();
        let source = unit(1, 8, 0);
        let best = nearest_reachable_position_from(
            &world,
            &source,
            [cell_pos(11, 0), cell_pos(2, 0), cell_pos(5, 0)],
        );
        assert_eq!(best, Some(cell_pos(5, 0)));
    }

    #[test]
    fn offsets_past_the_coordinate_edge_clamp_to_the_edge_cell() {
        let asked = Cell::new(None);
        let recorder = |_: LocomotorId, _: CellPos, to: CellPos| {
            asked.set(Some(to));
            true
        };
        let settings = QuerySettings::default();
        let world = QueryWorld::new(settings, GridActorIndex::new(&settings), recorder).unwrap();

        let source = unit(1, 0, 0);
        let edge = Actor::new(ActorId(2), wpos(i32::MAX - 10, 0, 0));
        let result = reachable_from(&world, &source, [&edge], |_| vec![wvec(CELL_SIZE * 4, 0, 0)]);

        assert_eq!(result.len(), 1);
        assert_eq!(asked.get(), Some(CellPos::new(i32::MAX / CELL_SIZE, 0)));

        let best = nearest_reachable_from(
            &world,
            &source,
            [&edge],
            Some(|_: &Actor| vec![wvec(i32::MAX, 0, 0)]),
        );
        assert_eq!(best.map(|a| a.id), Some(ActorId(2)));
    }

    #[test]
    fn reachable_to_treats_each_candidate_as_source() {
        let world = split_world();
        let target = cell_pos(3, 3);

        let home = unit(1, 0, 0);
        let stranded = unit(2, 12, 0);
        let plane = Actor::new(ActorId(3), cell_pos(30, 0)).with_mobility(Mobility::Flying);
        let building = Actor::new(ActorId(4), cell_pos(3, 2));

        let reachable = reachable_to(&world, [&home, &stranded, &plane, &building], target);
        assert_eq!(ids(&reachable), vec![1, 3]);

        // The building is closest but immobile; the plane is far; the tank wins.
        let best = nearest_reachable_to(&world, [&plane, &building, &home], target);
        assert_eq!(best.map(|a| a.id), Some(ActorId(1)));
    }
}
