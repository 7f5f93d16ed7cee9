//! Synthetic scene generation for ground-truth testing.
//!
//! Builds a world of beacons observed by a chain of scanners with guaranteed
//! pairwise overlap, then scrambles each scanner's observations into its own
//! local frame (random group rotation + its position). Fusing the scene and
//! comparing the recovered origins against the known ones exercises the whole
//! alignment path end to end.

use super::PointCloud;
use crate::config::SyntheticConfig;
use crate::geometry::{rotations, Point3, Rotation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// A generated scene together with its ground truth.
#[derive(Debug, Clone)]
pub struct SyntheticScene {
    /// Per-scanner local-frame observations, scanner 0 first.
    pub scanners: Vec<PointCloud>,
    /// True scanner positions in the world frame, indexed by scanner id.
    /// Scanner 0 carries the identity rotation, so the world frame and the
    /// fused reference frame coincide.
    pub origins: Vec<Point3>,
    /// Number of distinct world beacons observed by at least one scanner.
    pub beacon_count: usize,
}

pub struct SceneGenerator {
    rng: StdRng,
}

impl SceneGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a chain of scanners along the x axis, `spacing` apart, each
    /// observing beacons within Chebyshev distance `range` of its position.
    /// Validated configs guarantee `spacing < 2 * range`, so consecutive
    /// scanners share an overlap region seeded with `shared_beacons` points.
    pub fn generate(&mut self, config: &SyntheticConfig) -> SyntheticScene {
        let range = config.range;
        let origins: Vec<Point3> = (0..config.scanners)
            .map(|i| Point3::new(i as i64 * config.spacing, 0, 0))
            .collect();

        let mut world: HashSet<Point3> = HashSet::new();

        // Beacons in the overlap slab between each consecutive scanner pair.
        for pair in origins.windows(2) {
            let (lo, hi) = (pair[1].x - range, pair[0].x + range);
            let mut placed = 0;
            while placed < config.shared_beacons {
                let p = Point3::new(
                    self.rng.gen_range(lo..=hi),
                    self.rng.gen_range(-range..=range),
                    self.rng.gen_range(-range..=range),
                );
                if world.insert(p) {
                    placed += 1;
                }
            }
        }

        // Beacons spread over each scanner's full field of view.
        for origin in &origins {
            let mut placed = 0;
            while placed < config.unique_beacons {
                let p = Point3::new(
                    self.rng.gen_range(origin.x - range..=origin.x + range),
                    self.rng.gen_range(-range..=range),
                    self.rng.gen_range(-range..=range),
                );
                if world.insert(p) {
                    placed += 1;
                }
            }
        }

        let mut world: Vec<Point3> = world.into_iter().collect();
        world.sort();

        let mut observed: HashSet<Point3> = HashSet::new();
        let mut scanners = Vec::with_capacity(origins.len());
        for (id, &origin) in origins.iter().enumerate() {
            let rotation = if id == 0 {
                Rotation::IDENTITY
            } else {
                rotations()[self.rng.gen_range(0..rotations().len())]
            };
            // local = Rᵗ·(w − t), the inverse of the fused-frame mapping
            // w = R·local + t that fusion is expected to recover.
            let inverse = rotation.transpose();
            let local: Vec<Point3> = world
                .iter()
                .filter(|w| chebyshev(**w - origin) <= range)
                .inspect(|w| {
                    observed.insert(**w);
                })
                .map(|&w| inverse.apply(w - origin))
                .collect();
            scanners.push(PointCloud::new(id, local));
        }

        SyntheticScene {
            scanners,
            origins,
            beacon_count: observed.len(),
        }
    }
}

fn chebyshev(v: Point3) -> i64 {
    v.x.abs().max(v.y.abs()).max(v.z.abs())
}
