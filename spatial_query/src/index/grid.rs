use std::collections::BTreeMap;

use log::{trace, warn};

use crate::{
    actor::{Actor, ActorId},
    cell::{CellPos, cell_containing, cell_span},
    error::ActorRecordError,
    index::ActorIndex,
    math::{WDist, WPos},
    settings::QuerySettings,
};

/// Uniform-grid actor index for broad-phase queries over one frozen simulation step.
///
/// Notes:
/// - Each actor lives in exactly one bucket, chosen by its center. A box query therefore never
///   yields the same actor twice.
/// - Buckets are kept in a `BTreeMap` keyed by `(x, y)` so a box query only walks the bucket
///   columns it overlaps and yields actors in a platform-independent order.
/// - World-wide radius maxima are maintained on insert. They only grow, which keeps them a safe
///   upper bound for the line-query broad phase.
#[derive(Debug, Clone)]
pub struct GridActorIndex {
    bucket_size: i32,
    actors: BTreeMap<ActorId, Actor>,
    buckets: BTreeMap<CellPos, Vec<ActorId>>,
    largest_radius: WDist,
    largest_blocking_radius: WDist,
}

impl GridActorIndex {
    /// An empty index bucketed per `settings`.
    ///
    /// # Panics
    /// Panics if the bucket size is not positive. Validate settings first.
    pub fn new(settings: &QuerySettings) -> Self {
        let bucket_size = settings.bucket_size();
        assert!(bucket_size > 0, "bucket size must be positive");
        Self {
            bucket_size,
            actors: BTreeMap::new(),
            buckets: BTreeMap::new(),
            largest_radius: WDist::ZERO,
            largest_blocking_radius: WDist::ZERO,
        }
    }

    /// Builds an index from a batch of actors, failing on the first malformed record.
    pub fn build(
        settings: &QuerySettings,
        actors: impl IntoIterator<Item = Actor>,
    ) -> Result<Self, ActorRecordError> {
        let mut index = Self::new(settings);
        for actor in actors {
            index.insert(actor)?;
        }
        Ok(index)
    }

    /// Adds one actor.
    ///
    /// Rejects duplicate ids and records that fail [`Actor::validate`]; the index is left
    /// unchanged in that case.
    pub fn insert(&mut self, actor: Actor) -> Result<(), ActorRecordError> {
        if let Err(err) = actor.validate() {
            warn!("rejecting actor record: {err}");
            return Err(err);
        }
        if self.actors.contains_key(&actor.id) {
            let err = ActorRecordError::DuplicateId(actor.id);
            warn!("rejecting actor record: {err}");
            return Err(err);
        }

        let radius = actor.max_shape_radius();
        self.largest_radius = self.largest_radius.max(radius);
        if actor.blocks_projectiles() {
            self.largest_blocking_radius = self.largest_blocking_radius.max(radius);
        }

        let bucket = cell_containing(actor.center, self.bucket_size);
        self.buckets.entry(bucket).or_default().push(actor.id);
        self.actors.insert(actor.id, actor);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl ActorIndex for GridActorIndex {
    fn actors_in_box(&self, a: WPos, b: WPos) -> Vec<&Actor> {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        let (lo, hi) = cell_span(a, b, self.bucket_size);

        let mut found = Vec::new();
        let mut buckets_visited = 0usize;
        let columns = self
            .buckets
            .range(CellPos::new(lo.x, i32::MIN)..=CellPos::new(hi.x, i32::MAX));

        for (bucket, ids) in columns {
            if bucket.y < lo.y || bucket.y > hi.y {
                continue;
            }
            buckets_visited += 1;

            for id in ids {
                let Some(actor) = self.actors.get(id) else {
                    continue;
                };
                let c = actor.center;
                if c.x >= min_x && c.x <= max_x && c.y >= min_y && c.y <= max_y {
                    found.push(actor);
                }
            }
        }

        trace!(
            "actors_in_box: {} actors from {buckets_visited} buckets",
            found.len()
        );
        found
    }

    fn largest_actor_radius(&self) -> WDist {
        self.largest_radius
    }

    fn largest_blocking_actor_radius(&self) -> WDist {
        self.largest_blocking_radius
    }
}
