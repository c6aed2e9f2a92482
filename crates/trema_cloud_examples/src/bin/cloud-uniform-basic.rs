use rand::rngs::StdRng;
use rand::SeedableRng;
use trema_cloud::prelude::*;
use trema_cloud_examples::{init_tracing, render_batch_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The worked reference configuration: a single level of 24 circles.
    let request = GenerationRequest::new(20_000)
        .with_depth(1)
        .with_density(0.4)
        .with_base_radius(0.18);

    let mut rng = StdRng::seed_from_u64(42);
    let run = regenerate(&request, &mut rng);

    tracing::info!(
        circles = run.circles,
        accepted = run.batch.len(),
        rejected = run.rejected,
        "generated basic cloud"
    );

    let config = RenderConfig::new((1000, 1000));
    render_batch_to_png(&run.batch, &config, "cloud-uniform-basic.png")?;

    Ok(())
}
