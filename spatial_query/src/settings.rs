/*!
Query layer settings.

The constants in [`crate::constants`] are the defaults; [`QuerySettings`] lets an engine with a
different cell size or index granularity override them once, at world construction.

Notes
- Distances are in world sub-cell units.
- Every peer in a lockstep session must use identical settings, otherwise cell quantization and
  broad-phase boxes diverge.
*/

use crate::{
    constants::{CELL_SIZE, INDEX_BUCKET_CELLS, LINE_OVERSCAN, MAX_LINE_OVERSCAN},
    error::SettingsError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    /// Terrain cell size used for path-oracle quantization.
    pub cell_size: i32,
    /// Fixed extra margin for the broad phase of line queries.
    pub line_overscan: i32,
    /// Grid index bucket side, in cells.
    pub bucket_cells: i32,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            line_overscan: LINE_OVERSCAN,
            bucket_cells: INDEX_BUCKET_CELLS,
        }
    }
}

impl QuerySettings {
    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_line_overscan(mut self, line_overscan: i32) -> Self {
        self.line_overscan = line_overscan;
        self
    }

    pub fn with_bucket_cells(mut self, bucket_cells: i32) -> Self {
        self.bucket_cells = bucket_cells;
        self
    }

    /// Side of one index bucket in world units.
    #[inline]
    pub fn bucket_size(&self) -> i32 {
        self.cell_size.saturating_mul(self.bucket_cells)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_size <= 0 {
            return Err(SettingsError::NonPositiveCellSize(self.cell_size));
        }
        if self.bucket_cells <= 0 {
            return Err(SettingsError::NonPositiveBucketCells(self.bucket_cells));
        }
        if self.line_overscan < 0 {
            return Err(SettingsError::NegativeLineOverscan(self.line_overscan));
        }
        if self.line_overscan > MAX_LINE_OVERSCAN {
            return Err(SettingsError::LineOverscanTooLarge {
                overscan: self.line_overscan,
                limit: MAX_LINE_OVERSCAN,
            });
        }
        Ok(())
    }
}
