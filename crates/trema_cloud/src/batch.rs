//! Renderer-facing parallel attribute buffers.
use crate::sampling::SamplePoint;

/// One generated point cloud, laid out for wholesale GPU upload.
///
/// Three parallel buffers of equal logical length: positions two floats per
/// point, colors three, level factors one. A batch is immutable once built
/// and is replaced as a whole on regeneration; consumers must size reads
/// from [`PointBatch::len`], which can be shorter than the requested sample
/// count, and must never read past it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointBatch {
    positions: Vec<f32>,
    colors: Vec<f32>,
    level_factors: Vec<f32>,
    len: usize,
}

impl PointBatch {
    /// Pack accepted points into flat buffers.
    pub fn from_points(points: &[SamplePoint]) -> Self {
        let mut positions = Vec::with_capacity(points.len() * 2);
        let mut colors = Vec::with_capacity(points.len() * 3);
        let mut level_factors = Vec::with_capacity(points.len());

        for p in points {
            positions.extend_from_slice(&[p.position.x, p.position.y]);
            colors.extend_from_slice(&p.color);
            level_factors.push(p.level_factor);
        }

        Self {
            positions,
            colors,
            level_factors,
            len: points.len(),
        }
    }

    /// Number of points in the batch.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Interleaved `x, y` pairs, `2 * len` floats.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Interleaved `r, g, b` triples, `3 * len` floats.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// One factor per point, `len` floats.
    pub fn level_factors(&self) -> &[f32] {
        &self.level_factors
    }
}
