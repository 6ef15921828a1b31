use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion sampling knobs for one benchmark group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeConfig {
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
}

pub const SMALL_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 15,
    warm_up_ms: 100,
    measure_ms: 200,
};

pub const MEDIUM_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 15,
    warm_up_ms: 500,
    measure_ms: 1000,
};

pub const LARGE_RUNTIME: RuntimeConfig = RuntimeConfig {
    sample_size: 10,
    warm_up_ms: 800,
    measure_ms: 1500,
};

impl RuntimeConfig {
    /// Picks a config by the length of the sequence being driven.
    pub fn for_len(len: usize) -> Self {
        if len <= 16_384 {
            SMALL_RUNTIME
        } else if len <= 65_536 {
            MEDIUM_RUNTIME
        } else {
            LARGE_RUNTIME
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(Duration::from_millis(self.warm_up_ms));
        group.measurement_time(Duration::from_millis(self.measure_ms));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.random()).collect()
}

/// Non-zero stride in `-max_step..=max_step`.
pub fn random_stride<R: Rng + ?Sized>(rng: &mut R, max_step: i16) -> isize {
    debug_assert!(max_step > 0);
    let step = isize::from(rng.random_range(1..=max_step));
    if rng.random_bool(0.5) { -step } else { step }
}
