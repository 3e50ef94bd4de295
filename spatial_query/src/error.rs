//! Boundary errors.
//!
//! Queries themselves never fail: unreachable sources, degenerate segments and empty candidate
//! sets all produce empty results. The errors below are contract violations caught where data
//! enters the layer, so a malformed record is reported instead of silently producing wrong
//! query answers.

use crate::actor::ActorId;

/// A malformed or conflicting actor record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ActorRecordError {
    /// An actor with the same id is already indexed.
    #[error("actor {0:?} is already indexed")]
    DuplicateId(ActorId),

    /// A hit shape radius exceeds [`crate::MAX_BODY_RADIUS`].
    #[error("actor {id:?} has a hit shape radius of {radius}, above the limit of {limit}")]
    RadiusTooLarge {
        /// The offending actor.
        id: ActorId,
        /// The radius found on the record.
        radius: i32,
        /// The configured maximum.
        limit: i32,
    },
}

/// Invalid [`crate::QuerySettings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Cells must have a positive side length.
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),

    /// Index buckets must span at least one cell.
    #[error("index bucket size must be positive, got {0} cells")]
    NonPositiveBucketCells(i32),

    /// The line overscan is a margin and cannot shrink the broad-phase box.
    #[error("line overscan must not be negative, got {0}")]
    NegativeLineOverscan(i32),

    /// The line overscan exceeds [`crate::MAX_LINE_OVERSCAN`].
    #[error("line overscan of {overscan} is above the limit of {limit}")]
    LineOverscanTooLarge {
        /// The configured overscan.
        overscan: i32,
        /// The accepted maximum.
        limit: i32,
    },
}
