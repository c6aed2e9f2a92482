//! Bounded-retry rejection sampling against an exclusion field.
use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::field::ExclusionField;
use crate::sampling::{rand01, CandidateSampling};

/// Attempt budget multiplier applied to the requested sample count.
pub const DEFAULT_ATTEMPT_FACTOR: usize = 10;

/// One accepted point with its decorative attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Position in `[-1,1]²`, strictly outside every circle of the field
    /// it was sampled against.
    pub position: Vec2,
    /// Independent uniform draw per channel, in `[0, 1]`.
    pub color: [f32; 3],
    /// Nearest-circle level normalized by the field's maximum level.
    pub level_factor: f32,
}

/// Outcome of one sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SampleRun {
    /// Accepted points, in acceptance order. The order carries no meaning.
    pub points: Vec<SamplePoint>,
    /// Candidates drawn, never more than `requested * attempt_factor`.
    pub attempts: usize,
    /// Candidates that landed inside a circle.
    pub rejected: usize,
}

/// Rejection sampler with a bounded attempt budget.
///
/// Every candidate is tested against every circle in the field; the
/// exhaustive scan is the reference behavior, not an oversight.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    /// Number of points to try to accept.
    pub requested: usize,
    /// Attempt budget as a multiple of `requested`.
    pub attempt_factor: usize,
}

impl RejectionSampler {
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
        }
    }

    /// Override the attempt budget multiplier.
    pub fn with_attempt_factor(mut self, attempt_factor: usize) -> Self {
        self.attempt_factor = attempt_factor;
        self
    }

    /// Draw candidates until `requested` points are accepted or the attempt
    /// budget runs out.
    ///
    /// A shorter-than-requested result is the designed partial-success
    /// outcome, not an error; callers must size buffers from the returned
    /// length. Against an empty field every candidate is accepted with a
    /// `level_factor` of zero.
    pub fn sample(
        &self,
        field: &ExclusionField,
        candidates: &dyn CandidateSampling,
        rng: &mut dyn RngCore,
    ) -> SampleRun {
        let max_attempts = self.requested.saturating_mul(self.attempt_factor);
        let mut points = Vec::with_capacity(self.requested);
        let mut attempts = 0;

        while points.len() < self.requested && attempts < max_attempts {
            attempts += 1;
            let position = Vec2::from(candidates.draw(rng));
            if field.contains(position) {
                continue;
            }

            let color = [rand01(rng), rand01(rng), rand01(rng)];
            points.push(SamplePoint {
                position,
                color,
                level_factor: field.level_factor(position),
            });
        }

        if points.len() < self.requested {
            debug!(
                accepted = points.len(),
                requested = self.requested,
                attempts,
                "attempt budget exhausted before the batch filled"
            );
        }

        SampleRun {
            rejected: attempts - points.len(),
            attempts,
            points,
        }
    }
}
