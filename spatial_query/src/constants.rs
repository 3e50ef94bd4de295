/// Size of one terrain cell in world sub-cell units.
/// All cells are square.
pub const CELL_SIZE: i32 = 1024;

/// Fixed margin added to the broad-phase box of a line query, on top of the line width and
/// the largest relevant actor radius.
///
/// One full cell keeps actors whose center sits just past either end of the segment inside
/// the candidate box.
pub const LINE_OVERSCAN: i32 = 1024;

/// Largest line overscan [`crate::QuerySettings::validate`] accepts.
pub const MAX_LINE_OVERSCAN: i32 = 1 << 20;

/// Side length of one [`crate::GridActorIndex`] bucket, in cells.
///
/// Typical values: 2 .. 8. Larger buckets mean fewer lookups but more narrow-phase work.
pub const INDEX_BUCKET_CELLS: i32 = 4;

/// Largest hit-shape outer radius an actor record may carry.
///
/// Keeps every `radius + width` sum used by the line query far away from `i32` overflow.
pub const MAX_BODY_RADIUS: i32 = 1 << 20;
