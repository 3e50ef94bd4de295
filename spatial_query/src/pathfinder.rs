//! Path-existence oracle seam.
//!
//! The query layer never searches for paths itself. It only asks whether *some* terrain path
//! exists between two cells for a locomotor, ignoring every actor that might block the way.
//! Answers must be stable for the duration of one simulation step.

use std::collections::BTreeMap;

use crate::{actor::LocomotorId, cell::CellPos};

/// Answers terrain-only path existence.
pub trait PathOracle {
    fn path_exists(&self, locomotor: LocomotorId, from: CellPos, to: CellPos) -> bool;
}

impl<F> PathOracle for F
where
    F: Fn(LocomotorId, CellPos, CellPos) -> bool,
{
    #[inline]
    fn path_exists(&self, locomotor: LocomotorId, from: CellPos, to: CellPos) -> bool {
        self(locomotor, from, to)
    }
}

/// Identifier of a connected terrain region for one locomotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainId(pub u32);

/// Oracle backed by precomputed connectivity domains.
///
/// Two cells are mutually reachable for a locomotor iff both carry the same domain for it.
/// Cells without a domain are impassable for that locomotor. Domains are labeled by the
/// engine's pathfinder whenever terrain changes; this type only looks them up.
#[derive(Debug, Clone, Default)]
pub struct DomainPathOracle {
    domains: BTreeMap<(LocomotorId, CellPos), DomainId>,
}

impl DomainPathOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `cell` to `domain` for `locomotor`, replacing any previous label.
    pub fn set_domain(&mut self, locomotor: LocomotorId, cell: CellPos, domain: DomainId) {
        self.domains.insert((locomotor, cell), domain);
    }

    /// Labels every cell in the inclusive rectangle `min..=max` with `domain`.
    pub fn fill_domain(
        &mut self,
        locomotor: LocomotorId,
        min: CellPos,
        max: CellPos,
        domain: DomainId,
    ) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.set_domain(locomotor, CellPos::new(x, y), domain);
            }
        }
    }

    pub fn domain(&self, locomotor: LocomotorId, cell: CellPos) -> Option<DomainId> {
        self.domains.get(&(locomotor, cell)).copied()
    }
}

impl PathOracle for DomainPathOracle {
    fn path_exists(&self, locomotor: LocomotorId, from: CellPos, to: CellPos) -> bool {
        match (self.domain(locomotor, from), self.domain(locomotor, to)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
