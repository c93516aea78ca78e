//! Planar geometry for shapes: hit-testing and gesture updates.

pub mod hit_testing;
pub mod transform;

pub use hit_testing::{Position, Tolerance, distance_to_segment, is_near, position_within};
pub use transform::{moved, normalized, resized};
