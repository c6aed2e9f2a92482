//! The regeneration entry point: build a field, sample against it, pack a batch.
use rand::RngCore;
use tracing::info;

use crate::batch::PointBatch;
use crate::error::{Error, Result};
use crate::field::{ExclusionField, FieldParams};
use crate::render::FrameParams;
use crate::sampling::{RejectionSampler, UniformSquareSampling};

/// Full configuration for one generation request.
///
/// Only `depth`, `density`, `base_radius` and `samples` drive generation;
/// `speed` and `point_size` ride along for the renderer's per-frame uniforms
/// and never trigger a re-run on their own.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    /// Recursion depth of the exclusion hierarchy.
    pub depth: u32,
    /// Density multiplier for the per-level circle count.
    pub density: f32,
    /// Level-0 circle radius, in `(0, 1]`.
    pub base_radius: f32,
    /// Points to try to accept.
    pub samples: usize,
    /// Animation speed multiplier for the renderer.
    pub speed: f32,
    /// Point size for the renderer, in pixels.
    pub point_size: f32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            depth: 4,
            density: 0.4,
            base_radius: 0.18,
            samples: 5_000,
            speed: 1.0,
            point_size: 2.0,
        }
    }
}

impl GenerationRequest {
    /// Creates a request for `samples` points with default geometry.
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            ..Default::default()
        }
    }

    /// Sets the recursion depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the circle density multiplier.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Sets the level-0 circle radius.
    pub fn with_base_radius(mut self, base_radius: f32) -> Self {
        self.base_radius = base_radius;
        self
    }

    /// Sets the animation speed multiplier.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the rendered point size.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Validates the request, returning an error if invalid.
    ///
    /// Degenerate-but-legal configurations pass: `depth = 0` and
    /// `samples = 0` produce empty results rather than errors.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(Error::InvalidConfig(
                "density must be finite and > 0".into(),
            ));
        }
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 || self.base_radius > 1.0 {
            return Err(Error::InvalidConfig("base_radius must be in (0, 1]".into()));
        }
        if !self.speed.is_finite() {
            return Err(Error::InvalidConfig("speed must be finite".into()));
        }
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(Error::InvalidConfig(
                "point_size must be finite and > 0".into(),
            ));
        }

        Ok(())
    }

    /// The subset of the request that drives field generation.
    pub fn field_params(&self) -> FieldParams {
        FieldParams::new(self.depth, self.density, self.base_radius)
    }

    /// The subset of the request consumed by the renderer each frame.
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            speed: self.speed,
            point_size: self.point_size,
        }
    }
}

/// Everything produced by one generation pass.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GenerationRun {
    /// The packed batch, ready for the renderer.
    pub batch: PointBatch,
    /// Circles in the field the batch was sampled against.
    pub circles: usize,
    /// Candidates drawn.
    pub attempts: usize,
    /// Candidates that landed inside a circle.
    pub rejected: usize,
}

/// Build a fresh exclusion field and sample a point batch against it.
///
/// The field is rebuilt from scratch on every call; nothing is retained
/// across requests. The returned batch can be shorter than
/// `request.samples` when the attempt budget runs out first.
pub fn regenerate(request: &GenerationRequest, rng: &mut dyn RngCore) -> GenerationRun {
    let field = ExclusionField::build(&request.field_params(), rng);
    let run = RejectionSampler::new(request.samples).sample(
        &field,
        &UniformSquareSampling::new(),
        rng,
    );

    info!(
        circles = field.len(),
        accepted = run.points.len(),
        attempts = run.attempts,
        rejected = run.rejected,
        "regenerated point batch"
    );

    GenerationRun {
        batch: PointBatch::from_points(&run.points),
        circles: field.len(),
        attempts: run.attempts,
        rejected: run.rejected,
    }
}
