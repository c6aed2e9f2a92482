use std::time::Duration;

use trema_cloud::prelude::*;
use trema_cloud_examples::{init_tracing, render_batch_to_png, RenderConfig};

/// Simulates a user dragging parameter sliders: several requests land in
/// quick succession, the worker coalesces them, and the consumer only ever
/// renders the newest published batch.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let worker = GenerationWorker::spawn_seeded(42);

    // Burst of parameter changes; intermediate ones may never be generated.
    for density in [0.2, 0.4, 0.6, 0.8] {
        worker.submit(
            GenerationRequest::new(40_000)
                .with_depth(4)
                .with_density(density)
                .with_base_radius(0.2),
        )?;
    }

    // Wait for the first batch, then keep draining for a grace window;
    // whatever arrives last belongs to the newest surviving request.
    let mut batch = worker.recv_blocking()?;
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while std::time::Instant::now() < deadline {
        if let Some(newer) = worker.latest() {
            batch = newer;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    tracing::info!(points = batch.len(), "rendering newest batch");

    // A few frames of the animation clock, as the renderer would consume it.
    let params = FrameParams {
        speed: 1.5,
        point_size: 2.0,
    };
    for frame in 0..3 {
        let uniforms = frame_uniforms(frame as f32 / 60.0, 16.0 / 9.0, &params);
        tracing::debug!(?uniforms, "frame uniforms");
    }

    render_batch_to_png(
        &batch,
        &RenderConfig::new((900, 900)),
        "worker-last-request-wins.png",
    )?;

    Ok(())
}
