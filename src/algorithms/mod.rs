use crate::geometry::Point3;
use crate::{AlignmentResult, Result};

pub mod vote_alignment;

pub use vote_alignment::VoteAligner;

/// Common seam for pairwise alignment strategies.
///
/// An aligner takes a reference point set and a candidate point set (each in
/// its own frame) and returns the transform that maps the candidate onto the
/// reference with the highest coincidence count it can find. Implementations
/// never enforce a minimum overlap; interpreting a low count is the caller's
/// job.
pub trait PairwiseAligner: Send + Sync {
    /// Returns the name of the algorithm
    fn name(&self) -> &str;

    /// Find the best (coincidences, rotation, translation) for this pair.
    fn align(&self, reference: &[Point3], candidate: &[Point3]) -> Result<AlignmentResult>;
}
