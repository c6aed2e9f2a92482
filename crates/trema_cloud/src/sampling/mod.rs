//! Candidate generation and rejection sampling against an exclusion field.
//!
//! Candidates are proposed one at a time by a [`CandidateSampling`] strategy
//! and filtered by the bounded-retry [`RejectionSampler`].
use mint::Vector2;
use rand::RngCore;

pub mod rejection;
pub mod uniform_square;

pub use rejection::{RejectionSampler, SamplePoint, SampleRun};
pub use uniform_square::UniformSquareSampling;

/// Trait for drawing a single candidate position from the domain.
pub trait CandidateSampling: Send + Sync {
    fn draw(&self, rng: &mut dyn RngCore) -> Vector2<f32>;
}

/// Generate a random float in `[0, 1]`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_spans_the_unit_interval() {
        for value in [0, 1, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..=1.0).contains(&result),
                "rand01({value}) = {result} out of range"
            );
        }
    }

    #[test]
    fn rand01_midpoint_is_half() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 0.001);
    }
}
