//! Frozen-world view that every query runs against.
//!
//! [`QueryWorld`] bundles the settings, the spatial actor index and the path oracle for one
//! simulation step and exposes the whole query surface as methods. It holds no mutable state,
//! so any number of queries may run against it in any order with identical results.
//!
//! Usage
//! - Build the index and oracle for the step, then call [`QueryWorld::new`].
//! - Ask questions via the methods below, or the free functions in [`crate::reach`] and
//!   [`crate::intersect`] which take the world explicitly.

use crate::{
    actor::Actor,
    cell::{CellPos, cell_containing},
    error::SettingsError,
    index::ActorIndex,
    intersect,
    math::{WDist, WPos, WVec},
    pathfinder::PathOracle,
    reach::{self, Reachable},
    settings::QuerySettings,
};

#[derive(Debug, Clone)]
pub struct QueryWorld<I, P> {
    settings: QuerySettings,
    index: I,
    pathfinder: P,
}

impl<I: ActorIndex, P: PathOracle> QueryWorld<I, P> {
    /// Validates `settings` and wraps the collaborators.
    pub fn new(settings: QuerySettings, index: I, pathfinder: P) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            index,
            pathfinder,
        })
    }

    #[inline]
    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    #[inline]
    pub fn pathfinder(&self) -> &P {
        &self.pathfinder
    }

    /// The terrain cell containing `pos` under this world's cell size.
    #[inline]
    pub fn cell_containing(&self, pos: WPos) -> CellPos {
        cell_containing(pos, self.settings.cell_size)
    }

    pub fn reachable_from<'a, F>(
        &self,
        source: &Actor,
        candidates: impl IntoIterator<Item = &'a Actor>,
        offsets: F,
    ) -> Vec<Reachable<'a>>
    where
        F: FnMut(&Actor) -> Vec<WVec>,
    {
        reach::reachable_from(self, source, candidates, offsets)
    }

    pub fn reachable_positions_from(
        &self,
        source: &Actor,
        positions: impl IntoIterator<Item = WPos>,
    ) -> Vec<WPos> {
        reach::reachable_positions_from(self, source, positions)
    }

    pub fn nearest_reachable_from<'a, F>(
        &self,
        source: &Actor,
        candidates: impl IntoIterator<Item = &'a Actor>,
        offsets: Option<F>,
    ) -> Option<&'a Actor>
    where
        F: FnMut(&Actor) -> Vec<WVec>,
    {
        reach::nearest_reachable_from(self, source, candidates, offsets)
    }

    pub fn nearest_reachable_position_from(
        &self,
        source: &Actor,
        positions: impl IntoIterator<Item = WPos>,
    ) -> Option<WPos> {
        reach::nearest_reachable_position_from(self, source, positions)
    }

    pub fn reachable_to<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Actor>,
        target: WPos,
    ) -> Vec<&'a Actor> {
        reach::reachable_to(self, candidates, target)
    }

    pub fn nearest_reachable_to<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Actor>,
        target: WPos,
    ) -> Option<&'a Actor> {
        reach::nearest_reachable_to(self, candidates, target)
    }

    pub fn actors_on_line(
        &self,
        start: WPos,
        end: WPos,
        width: WDist,
        blockers_only: bool,
    ) -> Vec<&Actor> {
        intersect::actors_on_line(self, start, end, width, blockers_only)
    }

    pub fn actors_on_circle(&self, origin: WPos, radius: WDist) -> Vec<&Actor> {
        intersect::actors_on_circle(self, origin, radius)
    }
}
