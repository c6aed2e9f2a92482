//! Multi-level exclusion-circle ("trema") field generation.
//!
//! A field is a flat collection of forbidden disks spread over the `[-1,1]²`
//! domain. Each recursion level halves the circle radius and roughly doubles
//! the circle count, so deeper levels are smaller and denser, carving a
//! Cantor-like gap hierarchy for the sampler to fill.
use glam::Vec2;
use rand::RngCore;

use crate::sampling::rand01;

/// Circles per unit density at level 0; each level past that doubles it.
const LEVEL_COUNT_BASE: f32 = 30.0;
/// Lower edge of the radius jitter band.
const RADIUS_JITTER_MIN: f32 = 0.8;
/// Width of the radius jitter band.
const RADIUS_JITTER_SPAN: f32 = 0.4;

/// Parameters for building an exclusion field.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldParams {
    /// Number of recursion levels to generate.
    pub depth: u32,
    /// Density multiplier for the per-level circle count.
    pub density: f32,
    /// Radius of a level-0 circle before jitter.
    pub base_radius: f32,
}

impl FieldParams {
    pub fn new(depth: u32, density: f32, base_radius: f32) -> Self {
        Self {
            depth,
            density,
            base_radius,
        }
    }
}

/// One forbidden disk in the sampling domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionCircle {
    /// Center in `[-1,1]²`.
    pub center: Vec2,
    /// Jittered radius, always positive for positive `base_radius`.
    pub radius: f32,
    /// Recursion level this circle was generated at.
    pub level: u32,
}

/// An immutable hierarchy of exclusion circles.
///
/// Built in bulk for one set of [`FieldParams`] and discarded wholesale on
/// the next regeneration; there is no incremental update.
#[derive(Debug, Clone, Default)]
pub struct ExclusionField {
    circles: Vec<ExclusionCircle>,
    max_level: u32,
}

/// Number of circles generated at `level`, never less than one.
pub fn level_count(density: f32, level: u32) -> usize {
    let raw = density * 2.0_f32.powi(level as i32 + 1) * LEVEL_COUNT_BASE;
    (raw.floor() as usize).max(1)
}

impl ExclusionField {
    /// Generate a fresh field for `params`.
    ///
    /// Total over all inputs: `depth = 0` yields an empty field, and the
    /// per-level count floor keeps at least one circle per level no matter
    /// how small `density` is. Circles may overlap or nest freely.
    pub fn build(params: &FieldParams, rng: &mut dyn RngCore) -> Self {
        let mut circles = Vec::new();
        for level in 0..params.depth {
            let level_radius = params.base_radius * 0.5_f32.powi(level as i32);
            for _ in 0..level_count(params.density, level) {
                let center = Vec2::new(rand01(rng) * 2.0 - 1.0, rand01(rng) * 2.0 - 1.0);
                let radius =
                    level_radius * (RADIUS_JITTER_MIN + RADIUS_JITTER_SPAN * rand01(rng));
                circles.push(ExclusionCircle {
                    center,
                    radius,
                    level,
                });
            }
        }
        Self::from_circles(circles)
    }

    /// Wrap an existing circle collection, caching its maximum level.
    pub fn from_circles(circles: Vec<ExclusionCircle>) -> Self {
        let max_level = circles.iter().map(|c| c.level).max().unwrap_or(0);
        Self { circles, max_level }
    }

    /// Strict inside test against every circle in the field.
    pub fn contains(&self, p: Vec2) -> bool {
        self.circles
            .iter()
            .any(|c| p.distance_squared(c.center) < c.radius * c.radius)
    }

    /// Level of the circle whose center is nearest to `p`.
    ///
    /// Ties on exactly equal squared distance go to the earlier circle in
    /// field order; the tie-break is stable but carries no meaning.
    pub fn nearest_level(&self, p: Vec2) -> Option<u32> {
        let mut best: Option<(f32, u32)> = None;
        for c in &self.circles {
            let d2 = p.distance_squared(c.center);
            if best.is_none_or(|(best_d2, _)| d2 < best_d2) {
                best = Some((d2, c.level));
            }
        }
        best.map(|(_, level)| level)
    }

    /// Nearest-circle level normalized by the maximum level in the field,
    /// in `[0, 1]`; `0.0` when the field is empty.
    pub fn level_factor(&self, p: Vec2) -> f32 {
        match self.nearest_level(p) {
            Some(level) => level as f32 / self.max_level.max(1) as f32,
            None => 0.0,
        }
    }

    /// Highest level present, `0` for an empty field.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn circles(&self) -> &[ExclusionCircle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn circle(x: f32, y: f32, radius: f32, level: u32) -> ExclusionCircle {
        ExclusionCircle {
            center: Vec2::new(x, y),
            radius,
            level,
        }
    }

    #[test]
    fn circle_count_matches_per_level_formula() {
        let mut rng = StdRng::seed_from_u64(9);
        for (depth, density) in [(1, 0.4), (3, 0.4), (5, 0.01), (4, 2.5)] {
            let field = ExclusionField::build(&FieldParams::new(depth, density, 0.2), &mut rng);
            let expected: usize = (0..depth).map(|l| level_count(density, l)).sum();
            assert_eq!(field.len(), expected, "depth={depth} density={density}");
        }
    }

    #[test]
    fn example_configuration_yields_24_level_zero_circles() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = ExclusionField::build(&FieldParams::new(1, 0.4, 0.18), &mut rng);

        assert_eq!(field.len(), 24);
        assert_eq!(field.max_level(), 0);
        for c in field.circles() {
            assert_eq!(c.level, 0);
            assert!(c.radius >= 0.18 * 0.8 && c.radius <= 0.18 * 1.2);
        }
    }

    #[test]
    fn tiny_density_still_places_one_circle_per_level() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ExclusionField::build(&FieldParams::new(3, 1e-6, 0.2), &mut rng);
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn zero_depth_yields_empty_field() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ExclusionField::build(&FieldParams::new(0, 1.0, 0.5), &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.max_level(), 0);
    }

    #[test]
    fn centers_stay_in_domain_and_radii_stay_in_jitter_band() {
        let mut rng = StdRng::seed_from_u64(77);
        let params = FieldParams::new(4, 0.5, 0.3);
        let field = ExclusionField::build(&params, &mut rng);

        for c in field.circles() {
            assert!(c.center.x >= -1.0 && c.center.x <= 1.0);
            assert!(c.center.y >= -1.0 && c.center.y <= 1.0);

            let level_radius = params.base_radius * 0.5_f32.powi(c.level as i32);
            assert!(c.radius > 0.0);
            assert!(c.radius >= level_radius * RADIUS_JITTER_MIN - 1e-6);
            assert!(c.radius <= level_radius * (RADIUS_JITTER_MIN + RADIUS_JITTER_SPAN) + 1e-6);
        }
    }

    #[test]
    fn radius_bands_decay_with_level() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = ExclusionField::build(&FieldParams::new(5, 0.4, 0.4), &mut rng);
        assert_eq!(field.max_level(), 4);

        // Jitter is ±20%, narrower than the 2x gap between levels, so the
        // largest circle of level L+1 stays below the smallest of level L.
        for l in 0..4 {
            let min_at = |lvl: u32| {
                field
                    .circles()
                    .iter()
                    .filter(|c| c.level == lvl)
                    .map(|c| c.radius)
                    .fold(f32::MAX, f32::min)
            };
            let max_at = |lvl: u32| {
                field
                    .circles()
                    .iter()
                    .filter(|c| c.level == lvl)
                    .map(|c| c.radius)
                    .fold(0.0, f32::max)
            };
            assert!(max_at(l + 1) < min_at(l));
        }
    }

    #[test]
    fn contains_uses_strict_squared_distance() {
        let field = ExclusionField::from_circles(vec![circle(0.0, 0.0, 0.5, 0)]);

        assert!(field.contains(Vec2::new(0.2, 0.0)));
        // Exactly on the rim is outside.
        assert!(!field.contains(Vec2::new(0.5, 0.0)));
        assert!(!field.contains(Vec2::new(0.6, 0.0)));
    }

    #[test]
    fn nearest_level_ties_go_to_the_earlier_circle() {
        let field = ExclusionField::from_circles(vec![
            circle(-0.5, 0.0, 0.1, 2),
            circle(0.5, 0.0, 0.1, 7),
        ]);

        // The origin is exactly equidistant from both centers.
        assert_eq!(field.nearest_level(Vec2::ZERO), Some(2));
        assert_eq!(field.nearest_level(Vec2::new(0.4, 0.0)), Some(7));
    }

    #[test]
    fn level_factor_normalizes_by_max_level() {
        let field = ExclusionField::from_circles(vec![
            circle(-0.5, 0.0, 0.1, 0),
            circle(0.5, 0.0, 0.1, 4),
        ]);

        assert_eq!(field.level_factor(Vec2::new(-0.9, 0.0)), 0.0);
        assert_eq!(field.level_factor(Vec2::new(0.9, 0.0)), 1.0);

        // Single-level fields normalize by max(1, 0) and stay at zero.
        let flat = ExclusionField::from_circles(vec![circle(0.0, 0.0, 0.1, 0)]);
        assert_eq!(flat.level_factor(Vec2::new(0.3, 0.3)), 0.0);

        // Empty fields have no nearest circle at all.
        assert_eq!(ExclusionField::default().level_factor(Vec2::ZERO), 0.0);
    }

    #[test]
    fn determinism_for_same_seed() {
        let params = FieldParams::new(3, 0.7, 0.25);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = ExclusionField::build(&params, &mut rng_a);
        let b = ExclusionField::build(&params, &mut rng_b);
        assert_eq!(a.circles(), b.circles());

        let mut rng_c = StdRng::seed_from_u64(456);
        let c = ExclusionField::build(&params, &mut rng_c);
        assert_ne!(a.circles(), c.circles());
    }
}
