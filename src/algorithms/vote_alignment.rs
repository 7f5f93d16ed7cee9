use crate::algorithms::PairwiseAligner;
use crate::geometry::{rotations, Point3, Rotation};
use crate::AlignmentResult;
use instant::Instant;
use rayon::prelude::*;
use std::collections::HashMap;

/// Alignment by translation-histogram voting.
///
/// Correspondences between the two point sets are unknown, so for every
/// rotation we hypothesize one translation per (reference, rotated-candidate)
/// point pair and count how often each hypothesis occurs. Two sets sharing k
/// points under the true transform contribute at least k identical hypotheses,
/// so the mode of the histogram is the translation that makes the most points
/// coincide. No explicit point-to-point matching ever happens.
pub struct VoteAligner;

impl PairwiseAligner for VoteAligner {
    fn align(&self, reference: &[Point3], candidate: &[Point3]) -> crate::Result<AlignmentResult> {
        let start = Instant::now();

        let mut result = AlignmentResult::new(self.name());
        if reference.is_empty() || candidate.is_empty() {
            result.processing_time_ms = start.elapsed().as_millis() as f32;
            return Ok(result);
        }

        // Search all 24 rotations in parallel. The reduction is a max over a
        // total order on (count, rotation index), so it is associative and
        // yields the same winner regardless of work splitting: ties between
        // rotations go to the first one in group-enumeration order.
        let (coincidences, rot_index, translation) = rotations()
            .par_iter()
            .enumerate()
            .map(|(index, rot)| {
                let (count, translation) = best_translation(reference, candidate, rot);
                (count, index, translation)
            })
            .reduce(
                || (0, usize::MAX, Point3::ZERO),
                |a, b| {
                    if (b.0, std::cmp::Reverse(b.1)) > (a.0, std::cmp::Reverse(a.1)) {
                        b
                    } else {
                        a
                    }
                },
            );

        // Both sets are non-empty, so every rotation votes at least once.
        result.coincidences = coincidences;
        result.rotation = rotations()[rot_index];
        result.translation = translation;
        result.processing_time_ms = start.elapsed().as_millis() as f32;

        log::debug!(
            "best transform: {} coincidences, rotation #{}, translation {}",
            coincidences,
            rot_index,
            translation
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "VoteAligner"
    }
}

/// Histogram all `|reference| × |candidate|` translation hypotheses for one
/// rotation and return the mode with its count. Ties between translations go
/// to the lexicographically smallest vector, keeping the result independent
/// of hash-map iteration order.
fn best_translation(reference: &[Point3], candidate: &[Point3], rot: &Rotation) -> (usize, Point3) {
    let mut votes: HashMap<Point3, usize> = HashMap::new();
    for &p in candidate {
        let rotated = rot.apply(p);
        for &a in reference {
            *votes.entry(a - rotated).or_insert(0) += 1;
        }
    }

    votes
        .into_iter()
        .max_by(|(ta, ca), (tb, cb)| ca.cmp(cb).then_with(|| tb.cmp(ta)))
        .map(|(t, count)| (count, t))
        .unwrap_or((0, Point3::ZERO))
}
