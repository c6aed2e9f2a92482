//! Shared helpers for the example binaries: tracing setup and PNG previews
//! of generated point batches.
use anyhow::Result;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trema_cloud::batch::PointBatch;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// How to rasterize a batch into a preview image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Background color.
    pub background: [u8; 3],
    /// Dot radius in pixels.
    pub dot_radius: i32,
    /// Darken each point by its level factor to make the hierarchy visible.
    pub shade_by_level: bool,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [12, 12, 16],
            dot_radius: 1,
            shade_by_level: true,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot_radius(mut self, dot_radius: i32) -> Self {
        self.dot_radius = dot_radius;
        self
    }
}

/// Rasterize `batch` into a PNG at `path`.
///
/// Positions in `[-1,1]²` map to image pixels, colors come straight from the
/// batch's color buffer, and the level factor optionally scales brightness.
pub fn render_batch_to_png(batch: &PointBatch, config: &RenderConfig, path: &str) -> Result<()> {
    let (width, height) = config.image_size;
    let mut image = RgbImage::from_pixel(width, height, Rgb(config.background));

    let positions = batch.positions();
    let colors = batch.colors();
    let level_factors = batch.level_factors();

    for i in 0..batch.len() {
        let x = positions[i * 2];
        let y = positions[i * 2 + 1];
        let px = ((x + 1.0) * 0.5 * width as f32) as i32;
        // Flip y so the domain's +y points up in the image.
        let py = ((1.0 - y) * 0.5 * height as f32) as i32;

        let brightness = if config.shade_by_level {
            0.45 + 0.55 * level_factors[i]
        } else {
            1.0
        };
        let pixel = Rgb([
            (colors[i * 3] * brightness * 255.0) as u8,
            (colors[i * 3 + 1] * brightness * 255.0) as u8,
            (colors[i * 3 + 2] * brightness * 255.0) as u8,
        ]);

        let r = config.dot_radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (tx, ty) = (px + dx, py + dy);
                if tx >= 0 && ty >= 0 && (tx as u32) < width && (ty as u32) < height {
                    image.put_pixel(tx as u32, ty as u32, pixel);
                }
            }
        }
    }

    image.save(path)?;
    info!(points = batch.len(), path, "wrote preview image");
    Ok(())
}
