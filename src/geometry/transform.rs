use super::{Point3, Rotation};
use serde::{Deserialize, Serialize};

/// A rigid transform between scanner frames: rotate, then translate.
///
/// Applying the transform recovered for a scanner maps that scanner's
/// local-frame observations into the reference frame; its translation is the
/// scanner's position in that frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    pub rotation: Rotation,
    pub translation: Point3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            rotation: Rotation::IDENTITY,
            translation: Point3::ZERO,
        }
    }

    /// `p' = R·p + t`
    pub fn apply(&self, p: Point3) -> Point3 {
        self.rotation.apply(p) + self.translation
    }

    pub fn apply_all(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}
