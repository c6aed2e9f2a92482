#![forbid(unsafe_code)]
//! trema_cloud: hierarchical exclusion-circle ("trema") fields and rejection-sampled point clouds.
//!
//! Modules:
//! - field: multi-level exclusion-circle generation
//! - sampling: candidate strategies and the bounded-retry rejection sampler
//! - batch: renderer-facing parallel attribute buffers
//! - generate: the regeneration entry point tying field and sampler together
//! - worker: background generation with last-request-wins hand-off
//! - render: per-frame transform uniforms for the point-cloud renderer
pub mod batch;
pub mod error;
pub mod field;
pub mod generate;
pub mod render;
pub mod sampling;
pub mod worker;

/// Convenient re-exports for common types. Import with `use trema_cloud::prelude::*;`.
pub mod prelude {
    pub use crate::batch::PointBatch;
    pub use crate::error::{Error, Result};
    pub use crate::field::{ExclusionCircle, ExclusionField, FieldParams};
    pub use crate::generate::{regenerate, GenerationRequest, GenerationRun};
    pub use crate::render::{frame_uniforms, FrameParams, FrameUniforms};
    pub use crate::sampling::{
        CandidateSampling, RejectionSampler, SamplePoint, SampleRun, UniformSquareSampling,
    };
    pub use crate::worker::GenerationWorker;
}
