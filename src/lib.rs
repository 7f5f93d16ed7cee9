pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod data;
pub mod fusion;
pub mod geometry;
pub mod logging;
pub mod visualization;

pub use algorithms::*;
pub use data::*;
pub use geometry::*;

/// Outcome of one pairwise alignment attempt: the transform that produced the
/// most coinciding points over the whole rotation group.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AlignmentResult {
    pub coincidences: usize,
    pub rotation: geometry::Rotation,
    pub translation: geometry::Point3,
    pub processing_time_ms: f32,
    pub algorithm_used: String,
}

impl AlignmentResult {
    pub fn new(algorithm: &str) -> Self {
        Self {
            coincidences: 0,
            rotation: geometry::Rotation::IDENTITY,
            translation: geometry::Point3::ZERO,
            processing_time_ms: 0.0,
            algorithm_used: algorithm.to_string(),
        }
    }

    /// The recovered transform as a single applicable value.
    pub fn transform(&self) -> geometry::Transform {
        geometry::Transform {
            rotation: self.rotation,
            translation: self.translation,
        }
    }
}

pub type Result<T> = anyhow::Result<T>;
