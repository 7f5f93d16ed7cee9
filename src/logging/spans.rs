//! Structured spans for hierarchical logging
//!
//! Pre-defined span structures for the alignment engine, the fusion loop, and
//! CLI test sessions, keeping field names consistent across the system.

use crate::geometry::Point3;
use std::time::Instant;
use tracing::{span, Level, Span};
use uuid::Uuid;

/// Span for one pairwise alignment attempt
pub struct AlignmentSpan {
    span: Span,
    start_time: Instant,
}

impl AlignmentSpan {
    /// Create a new alignment span
    pub fn new(
        algorithm_name: &str,
        reference_size: usize,
        candidate_size: usize,
        correlation_id: Option<Uuid>,
    ) -> Self {
        let span = if let Some(corr_id) = correlation_id {
            span!(
                Level::INFO,
                "alignment",
                algorithm = algorithm_name,
                reference_size = reference_size,
                candidate_size = candidate_size,
                correlation_id = %corr_id
            )
        } else {
            span!(
                Level::INFO,
                "alignment",
                algorithm = algorithm_name,
                reference_size = reference_size,
                candidate_size = candidate_size
            )
        };

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    /// Record the winning transform of the rotation search
    pub fn record_result(&self, coincidences: usize, translation: Point3) {
        let duration = self.start_time.elapsed();
        tracing::info!(
            parent: &self.span,
            coincidences = coincidences,
            translation = %translation,
            execution_time_ms = duration.as_millis(),
            "Alignment completed"
        );
    }

    /// Get the underlying span for manual instrumentation
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

/// Span for one round of the greedy fusion loop
pub struct FusionRoundSpan {
    span: Span,
    start_time: Instant,
}

impl FusionRoundSpan {
    /// Create a new fusion round span
    pub fn new(
        round: usize,
        candidates: usize,
        map_size: usize,
        correlation_id: Option<Uuid>,
    ) -> Self {
        let span = if let Some(corr_id) = correlation_id {
            span!(
                Level::INFO,
                "fusion_round",
                round = round,
                candidates = candidates,
                map_size = map_size,
                correlation_id = %corr_id
            )
        } else {
            span!(
                Level::INFO,
                "fusion_round",
                round = round,
                candidates = candidates,
                map_size = map_size
            )
        };

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    /// Record the merge that closed this round
    pub fn record_merge(
        &self,
        scanner: usize,
        coincidences: usize,
        origin: Point3,
        map_size_after: usize,
    ) {
        let duration = self.start_time.elapsed();
        tracing::info!(
            parent: &self.span,
            scanner = scanner,
            coincidences = coincidences,
            origin = %origin,
            map_size_after = map_size_after,
            execution_time_ms = duration.as_millis(),
            "Fusion round completed"
        );
    }

    /// Record a round in which no candidate met the configured minimum
    pub fn record_unresolved(&self, best_coincidences: usize, required: usize) {
        tracing::warn!(
            parent: &self.span,
            best_coincidences = best_coincidences,
            required = required,
            "No remaining scanner meets the minimum overlap"
        );
    }

    /// Get the underlying span
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

/// Span for test session tracking
pub struct SessionSpan {
    span: Span,
    start_time: Instant,
    session_id: Uuid,
}

impl SessionSpan {
    /// Create a new session span
    pub fn new(session_type: &str, session_id: Uuid) -> Self {
        let span = span!(
            Level::INFO,
            "session",
            session_type = session_type,
            session_id = %session_id
        );

        Self {
            span,
            start_time: Instant::now(),
            session_id,
        }
    }

    /// Record session configuration
    pub fn record_config(&self, parameters: serde_json::Value) {
        tracing::info!(
            parent: &self.span,
            parameters = %parameters,
            "Session configuration recorded"
        );
    }

    /// Record session completion
    pub fn record_completion(&self, scanners_merged: usize, beacon_count: usize) {
        let duration = self.start_time.elapsed();
        tracing::info!(
            parent: &self.span,
            scanners_merged = scanners_merged,
            beacon_count = beacon_count,
            session_duration_ms = duration.as_millis(),
            "Session completed"
        );
    }

    /// Get the session ID
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Get the underlying span
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_span() {
        let correlation_id = Uuid::new_v4();
        let span = AlignmentSpan::new("VoteAligner", 120, 26, Some(correlation_id));

        let _enter = span.enter();
        span.record_result(12, Point3::new(68, -1246, -43));
    }

    #[test]
    fn test_fusion_round_span() {
        let span = FusionRoundSpan::new(0, 4, 25, None);

        let _enter = span.enter();
        span.record_merge(3, 12, Point3::new(1105, -1205, 1229), 51);
    }

    #[test]
    fn test_session_span() {
        let session_id = Uuid::new_v4();
        let span = SessionSpan::new("synthetic_test", session_id);

        let _enter = span.enter();
        span.record_config(serde_json::json!({
            "scanners": 5,
            "shared_beacons": 12,
            "seed": 0
        }));
        span.record_completion(5, 79);
        assert_eq!(span.session_id(), session_id);
    }
}
