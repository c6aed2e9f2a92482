use rand::rngs::StdRng;
use rand::SeedableRng;
use trema_cloud::prelude::*;
use trema_cloud_examples::{init_tracing, render_batch_to_png, RenderConfig};

/// Renders the same configuration at increasing recursion depth, showing how
/// deeper levels carve smaller and denser gaps into the cloud.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::new((800, 800)).with_dot_radius(1);

    for depth in 1..=5 {
        let request = GenerationRequest::new(30_000)
            .with_depth(depth)
            .with_density(0.3)
            .with_base_radius(0.22);

        // Re-seed per depth so the level-0 circles stay put across images.
        let mut rng = StdRng::seed_from_u64(7);
        let run = regenerate(&request, &mut rng);

        tracing::info!(
            depth,
            circles = run.circles,
            accepted = run.batch.len(),
            "depth sweep step"
        );

        let path = format!("fields-depth-{depth}.png");
        render_batch_to_png(&run.batch, &config, &path)?;
    }

    Ok(())
}
