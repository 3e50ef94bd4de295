//! Read-only actor records consumed by the query layer.
//!
//! An [`Actor`] is a snapshot view of one world entity for the duration of a simulation step:
//! where it is, how it moves, and which targetable bodies it has. Nothing in this crate mutates
//! an actor after it has been indexed.

use crate::{
    constants::MAX_BODY_RADIUS,
    error::ActorRecordError,
    flags::{ActorTag, ActorTags},
    math::{WDist, WPos},
};

/// Stable actor identifier.
///
/// Ordering on this id is the tie-break for every "nearest" or ordered result, so results never
/// depend on the order the spatial index happens to yield actors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u32);

/// Opaque terrain-traversal profile key. Only the path oracle interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocomotorId(pub u16);

/// How an actor crosses the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mobility {
    /// Ignores terrain entirely; reachable from and able to reach anywhere.
    Flying,
    /// Moves over terrain according to the given profile.
    Grounded(LocomotorId),
}

/// One targetable position on an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitShape {
    /// Disabled shapes are ignored by intersection tests.
    pub enabled: bool,
    /// Outer radius of the body, or `None` for a bare targetable point.
    pub outer_radius: Option<WDist>,
}

impl HitShape {
    pub fn body(outer_radius: WDist) -> Self {
        Self {
            enabled: true,
            outer_radius: Some(outer_radius),
        }
    }

    pub fn point() -> Self {
        Self {
            enabled: true,
            outer_radius: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub center: WPos,
    /// `None` for ground actors without a locomotor (buildings, props).
    pub mobility: Option<Mobility>,
    pub hit_shapes: Vec<HitShape>,
    pub tags: ActorTags,
}

impl Actor {
    /// A stationary actor with no hit shapes and no tags.
    pub fn new(id: ActorId, center: WPos) -> Self {
        Self {
            id,
            center,
            mobility: None,
            hit_shapes: Vec::new(),
            tags: ActorTags::default(),
        }
    }

    pub fn with_mobility(mut self, mobility: Mobility) -> Self {
        self.mobility = Some(mobility);
        self
    }

    pub fn with_hit_shape(mut self, shape: HitShape) -> Self {
        self.hit_shapes.push(shape);
        self
    }

    pub fn with_tag(mut self, tag: ActorTag) -> Self {
        self.tags.add(tag);
        self
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        matches!(self.mobility, Some(Mobility::Flying))
    }

    #[inline]
    pub fn blocks_projectiles(&self) -> bool {
        self.tags.has(ActorTag::BlocksProjectiles)
    }

    /// Effective body width for intersection tests: the largest outer radius among enabled
    /// shapes that carry a body, or zero.
    pub fn body_radius(&self) -> WDist {
        self.hit_shapes
            .iter()
            .filter(|s| s.enabled)
            .filter_map(|s| s.outer_radius)
            .max()
            .unwrap_or(WDist::ZERO)
    }

    /// Largest outer radius over every shape, enabled or not.
    ///
    /// World-wide maxima are built from this so toggling a shape on never escapes the
    /// broad phase.
    pub fn max_shape_radius(&self) -> WDist {
        self.hit_shapes
            .iter()
            .filter_map(|s| s.outer_radius)
            .max()
            .unwrap_or(WDist::ZERO)
    }

    /// Checks the record against the limits the query arithmetic relies on.
    pub fn validate(&self) -> Result<(), ActorRecordError> {
        let radius = self.max_shape_radius().length();
        if radius > MAX_BODY_RADIUS {
            return Err(ActorRecordError::RadiusTooLarge {
                id: self.id,
                radius,
                limit: MAX_BODY_RADIUS,
            });
        }
        Ok(())
    }
}
