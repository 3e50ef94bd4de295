pub mod actor;
pub mod cell;
pub mod constants;
pub mod error;
pub mod flags;
pub mod index;
pub mod intersect;
pub mod math;
pub mod nearest;
pub mod pathfinder;
pub mod projection;
pub mod reach;
pub mod settings;
pub mod world;

pub use actor::{Actor, ActorId, HitShape, LocomotorId, Mobility};
pub use cell::{CellPos, cell_containing};
pub use constants::{
    CELL_SIZE, INDEX_BUCKET_CELLS, LINE_OVERSCAN, MAX_BODY_RADIUS, MAX_LINE_OVERSCAN,
};
pub use error::{ActorRecordError, SettingsError};
pub use flags::{ActorTag, ActorTags};
pub use index::{ActorIndex, GridActorIndex};
pub use intersect::{actors_on_circle, actors_on_line};
pub use math::{
    WDist, WPos, WVec, distance_squared, horizontal_distance_squared, saturating_offset, wpos,
    wvec,
};
pub use nearest::{closest_actor_ignoring_path, closest_position_ignoring_path};
pub use pathfinder::{DomainId, DomainPathOracle, PathOracle};
pub use projection::{lerp, minimum_point_line_projection};
pub use reach::{
    Reachable, nearest_reachable_from, nearest_reachable_position_from, nearest_reachable_to,
    reachable_from, reachable_positions_from, reachable_to,
};
pub use settings::QuerySettings;
pub use world::QueryWorld;
