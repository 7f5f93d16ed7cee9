//! Greedy iterative fusion of scanner clouds into one global map.
//!
//! Every round re-evaluates all still-unmerged scanners against the current
//! map, not the original reference scanner: scanners that only transitively
//! overlap the reference become alignable once their neighbors are merged,
//! which is why the loop is greedy-iterative rather than a single pass.

use crate::algorithms::{PairwiseAligner, VoteAligner};
use crate::config::FusionConfig;
use crate::data::PointCloud;
use crate::geometry::Point3;
use crate::logging::{AlignmentSpan, FusionRoundSpan};
use crate::AlignmentResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A scanner's recovered position in the reference frame, in merge order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScannerOrigin {
    /// Input index of the scanner.
    pub scanner: usize,
    /// Recovered translation = the scanner's position.
    pub position: Point3,
    /// Coincidence count of the accepted transform. For the reference scanner
    /// this is its own beacon count.
    pub coincidences: usize,
}

/// Final global map plus the origins recovered along the way.
#[derive(Debug, Clone)]
pub struct FusionOutcome {
    /// Deduplicated beacons in the reference frame.
    pub beacons: HashSet<Point3>,
    /// One entry per scanner, merge order; the reference scanner's zero
    /// origin comes first.
    pub origins: Vec<ScannerOrigin>,
    /// Merge rounds performed (= scanners − 1).
    pub rounds: usize,
}

impl FusionOutcome {
    pub fn origin_positions(&self) -> Vec<Point3> {
        self.origins.iter().map(|o| o.position).collect()
    }
}

/// Fuse all scanners into the frame of `scanners[0]`.
///
/// Each round aligns every remaining scanner against the current map in
/// parallel and merges the single best match; ties on coincidence count go to
/// the lowest remaining index, keeping the merge order deterministic. Fails
/// if some round's best candidate stays below `config.min_coincidences`.
pub fn fuse(scanners: Vec<PointCloud>, config: &FusionConfig) -> crate::Result<FusionOutcome> {
    anyhow::ensure!(!scanners.is_empty(), "no scanners to fuse");
    anyhow::ensure!(
        config.min_coincidences >= 1,
        "min_coincidences must be at least 1"
    );

    let mut remaining = scanners;
    let reference_cloud = remaining.remove(0);
    let mut origins = vec![ScannerOrigin {
        scanner: reference_cloud.id(),
        position: Point3::ZERO,
        coincidences: reference_cloud.len(),
    }];
    let mut map: HashSet<Point3> = reference_cloud.points().iter().copied().collect();

    let aligner = VoteAligner;
    let mut rounds = 0;

    while !remaining.is_empty() {
        let span = FusionRoundSpan::new(rounds, remaining.len(), map.len(), None);
        let _enter = span.enter();

        let reference: Vec<Point3> = map.iter().copied().collect();
        let candidates: Vec<(usize, AlignmentResult)> = remaining
            .par_iter()
            .enumerate()
            .map(|(index, cloud)| {
                let align_span =
                    AlignmentSpan::new(aligner.name(), reference.len(), cloud.len(), None);
                let _align = align_span.enter();
                aligner.align(&reference, cloud.points()).map(|result| {
                    align_span.record_result(result.coincidences, result.translation);
                    (index, result)
                })
            })
            .collect::<crate::Result<_>>()?;

        // Best coincidence count wins; ties go to the first candidate.
        let (best_index, best) = candidates
            .into_iter()
            .max_by_key(|(index, result)| (result.coincidences, std::cmp::Reverse(*index)))
            .ok_or_else(|| anyhow::anyhow!("round produced no candidates"))?;

        if best.coincidences < config.min_coincidences {
            span.record_unresolved(best.coincidences, config.min_coincidences);
            anyhow::bail!(
                "unresolvable scanner: best overlap this round is {} coincidences \
                 (scanner {}), below the required minimum of {}",
                best.coincidences,
                remaining[best_index].id(),
                config.min_coincidences
            );
        }

        let cloud = remaining.remove(best_index);
        let transform = best.transform();
        for &p in cloud.points() {
            map.insert(transform.apply(p));
        }

        span.record_merge(cloud.id(), best.coincidences, best.translation, map.len());
        log::info!(
            "merged scanner {} at {} ({} coincidences), {} scanners remaining",
            cloud.id(),
            best.translation,
            best.coincidences,
            remaining.len()
        );

        origins.push(ScannerOrigin {
            scanner: cloud.id(),
            position: best.translation,
            coincidences: best.coincidences,
        });
        rounds += 1;
    }

    Ok(FusionOutcome {
        beacons: map,
        origins,
        rounds,
    })
}
