use crate::geometry::Point3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod loader;
pub mod synthetic;

pub use loader::{format_scanners, load_scanners, parse_scanners};
pub use synthetic::{SceneGenerator, SyntheticScene};

/// One scanner's observed beacons, in that scanner's local frame.
///
/// Points are deduplicated on construction; order is otherwise preserved for
/// reproducible iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointCloud {
    id: usize,
    points: Vec<Point3>,
}

impl PointCloud {
    pub fn new(id: usize, points: Vec<Point3>) -> Self {
        let mut seen = HashSet::with_capacity(points.len());
        let points = points.into_iter().filter(|p| seen.insert(*p)).collect();
        Self { id, points }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
