//! Background generation with last-request-wins coalescing.
//!
//! Generation can take non-trivial wall-clock time at high depth and sample
//! counts, so it runs off the frame thread. Finished batches cross back as
//! single [`Arc`] values: the consumer only ever observes whole batches,
//! atomically replaced, never a partially written one.
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::batch::PointBatch;
use crate::error::{Error, Result};
use crate::generate::{regenerate, GenerationRequest};

enum Command {
    Generate(GenerationRequest),
    Shutdown,
}

/// Handle to a background generation thread.
///
/// Requests submitted while a generation is still running are coalesced:
/// before generating, the worker drains its queue and keeps only the newest
/// request, so a stale in-flight configuration is never generated when a
/// newer one is already waiting.
pub struct GenerationWorker {
    commands: Sender<Command>,
    batches: Receiver<Arc<PointBatch>>,
    handle: Option<JoinHandle<()>>,
}

impl GenerationWorker {
    /// Spawn a worker seeded from OS entropy.
    pub fn spawn() -> Self {
        Self::spawn_with_rng(StdRng::from_os_rng())
    }

    /// Spawn a worker with a fixed seed for reproducible output.
    pub fn spawn_seeded(seed: u64) -> Self {
        Self::spawn_with_rng(StdRng::seed_from_u64(seed))
    }

    fn spawn_with_rng(rng: StdRng) -> Self {
        let (command_tx, command_rx) = unbounded::<Command>();
        let (batch_tx, batch_rx) = unbounded::<Arc<PointBatch>>();

        let handle = thread::spawn(move || worker_loop(command_rx, batch_tx, rng));

        Self {
            commands: command_tx,
            batches: batch_rx,
            handle: Some(handle),
        }
    }

    /// Queue a regeneration. Newer submissions supersede queued ones.
    pub fn submit(&self, request: GenerationRequest) -> Result<()> {
        request.validate()?;
        self.commands
            .send(Command::Generate(request))
            .map_err(|_| Error::Worker("generation thread is gone".into()))
    }

    /// Newest batch published since the last call, if any.
    ///
    /// Drains every pending batch and returns only the most recent one, so a
    /// consumer that polls once per frame always renders the latest
    /// completed generation.
    pub fn latest(&self) -> Option<Arc<PointBatch>> {
        let mut newest = None;
        loop {
            match self.batches.try_recv() {
                Ok(batch) => newest = Some(batch),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        newest
    }

    /// Block until the next batch is published.
    pub fn recv_blocking(&self) -> Result<Arc<PointBatch>> {
        self.batches
            .recv()
            .map_err(|_| Error::Worker("generation thread is gone".into()))
    }
}

impl Drop for GenerationWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("generation thread panicked during shutdown");
            }
        }
    }
}

fn worker_loop(commands: Receiver<Command>, batches: Sender<Arc<PointBatch>>, mut rng: StdRng) {
    while let Ok(command) = commands.recv() {
        let mut request = match command {
            Command::Generate(request) => request,
            Command::Shutdown => return,
        };

        // Coalesce the queue: only the newest request is worth generating.
        let mut superseded = 0usize;
        loop {
            match commands.try_recv() {
                Ok(Command::Generate(newer)) => {
                    request = newer;
                    superseded += 1;
                }
                Ok(Command::Shutdown) => return,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if superseded > 0 {
            debug!(superseded, "dropped superseded generation requests");
        }

        let run = regenerate(&request, &mut rng);
        if batches.send(Arc::new(run.batch)).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn publishes_a_batch_per_processed_request() {
        let worker = GenerationWorker::spawn_seeded(1);
        // depth 0 leaves the field empty, so the count is exact.
        worker
            .submit(GenerationRequest::new(50).with_depth(0))
            .unwrap();

        let batch = worker.recv_blocking().unwrap();
        assert_eq!(batch.len(), 50);
        assert!(worker.latest().is_none());
    }

    #[test]
    fn seeded_worker_matches_direct_regeneration() {
        let request = GenerationRequest::new(200).with_depth(3);

        let worker = GenerationWorker::spawn_seeded(7);
        worker.submit(request.clone()).unwrap();
        let from_worker = worker.recv_blocking().unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let direct = regenerate(&request, &mut rng);

        assert_eq!(*from_worker, direct.batch);
    }

    #[test]
    fn the_last_observed_batch_is_for_the_newest_request() {
        let worker = GenerationWorker::spawn_seeded(11);
        for samples in [10, 20, 30, 40] {
            worker
                .submit(GenerationRequest::new(samples).with_depth(0))
                .unwrap();
        }

        // Some requests may coalesce away; whatever was published last must
        // belong to the newest one.
        let mut last = None;
        while let Ok(batch) = worker.batches.recv_timeout(Duration::from_secs(5)) {
            let done = batch.len() == 40;
            last = Some(batch);
            if done {
                break;
            }
        }
        assert_eq!(last.expect("at least one batch").len(), 40);
    }

    #[test]
    fn submit_rejects_invalid_requests() {
        let worker = GenerationWorker::spawn_seeded(3);
        let result = worker.submit(GenerationRequest::new(10).with_density(-1.0));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
