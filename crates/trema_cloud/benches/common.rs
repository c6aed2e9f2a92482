use std::time::Duration;

use criterion::{Criterion, Throughput};

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
}

pub fn accepted_throughput(accepted: usize) -> Throughput {
    Throughput::Elements(accepted.max(1) as u64)
}
