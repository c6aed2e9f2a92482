//! Uniform candidate positions over a centered square domain.
use mint::Vector2;
use rand::RngCore;

use crate::sampling::{rand01, CandidateSampling};

/// Uniform i.i.d. candidates over `[-half_extent, half_extent]²`.
#[derive(Debug, Clone)]
pub struct UniformSquareSampling {
    /// Half the side length of the square domain.
    pub half_extent: f32,
}

impl UniformSquareSampling {
    /// The unit square `[-1, 1]²`, the generation domain.
    pub fn new() -> Self {
        Self { half_extent: 1.0 }
    }

    pub fn with_half_extent(half_extent: f32) -> Self {
        Self { half_extent }
    }
}

impl Default for UniformSquareSampling {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSampling for UniformSquareSampling {
    fn draw(&self, rng: &mut dyn RngCore) -> Vector2<f32> {
        let x = (rand01(rng) * 2.0 - 1.0) * self.half_extent;
        let y = (rand01(rng) * 2.0 - 1.0) * self.half_extent;
        Vector2 { x, y }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn candidates_stay_in_the_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        let sampling = UniformSquareSampling::new();

        for _ in 0..1_000 {
            let p = sampling.draw(&mut rng);
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= -1.0 && p.y <= 1.0);
        }
    }

    #[test]
    fn half_extent_scales_the_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        let sampling = UniformSquareSampling::with_half_extent(0.25);

        for _ in 0..200 {
            let p = sampling.draw(&mut rng);
            assert!(p.x.abs() <= 0.25);
            assert!(p.y.abs() <= 0.25);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let sampling = UniformSquareSampling::new();

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        for _ in 0..32 {
            let a = sampling.draw(&mut rng_a);
            let b = sampling.draw(&mut rng_b);
            assert_eq!((a.x, a.y), (b.x, b.y));
        }
    }
}
