//! Exact-integer 3D geometry: points, the 24 proper cube rotations, and rigid
//! transforms. Everything here is pure data with exact equality; no epsilon
//! comparisons anywhere.

pub mod point;
pub mod rotation;
pub mod transform;

pub use point::Point3;
pub use rotation::{rotations, Rotation};
pub use transform::Transform;
