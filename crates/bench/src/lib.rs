//! Criterion presets and seeded inputs shared by the sequence and bfs benches.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASE_SEED: u64 = 0xA11A_7E57;

#[derive(Clone, Copy, Debug)]
pub struct RuntimePreset {
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
}

/// Mutators and derivations over sequences of up to 64k slots.
pub const SEQUENCE_OPS: RuntimePreset = RuntimePreset {
    sample_size: 15,
    warm_up_ms: 100,
    measure_ms: 200,
};

/// One traversal per iteration over generated graphs.
pub const GRAPH_TRAVERSAL: RuntimePreset = RuntimePreset {
    sample_size: 10,
    warm_up_ms: 120,
    measure_ms: 360,
};

impl RuntimePreset {
    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(Duration::from_millis(self.warm_up_ms));
        group.measurement_time(Duration::from_millis(self.measure_ms));
    }
}

/// Seed for one `(case, size)` input, so each benchmark id sees the same
/// input on every run.
pub fn input_seed(case: u64, size: usize) -> u64 {
    BASE_SEED ^ ((size as u64) << 7) ^ case
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(BASE_SEED)
}

/// `len` values drawn uniformly from `0..2^bits`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, bits: u32) -> Vec<u64> {
    let bound = 1_u64.checked_shl(bits).unwrap_or(0);
    (0..len)
        .map(|_| {
            if bound == 0 {
                rng.random()
            } else {
                rng.random_range(0..bound)
            }
        })
        .collect()
}
