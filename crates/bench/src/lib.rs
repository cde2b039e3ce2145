use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;
const STRING_KEY_LEN: usize = 12;

/// Sample count and timing for one benchmark input size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimePreset {
    pub max_len: usize,
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
    pub flat_sampling: bool,
}

/// Ordered by `max_len`; the last entry covers every larger input.
pub const RUNTIME_PRESETS: [RuntimePreset; 3] = [
    RuntimePreset {
        max_len: 16384,
        sample_size: 15,
        warm_up_ms: 100,
        measure_ms: 200,
        flat_sampling: false,
    },
    RuntimePreset {
        max_len: 65536,
        sample_size: 15,
        warm_up_ms: 300,
        measure_ms: 600,
        flat_sampling: true,
    },
    RuntimePreset {
        max_len: usize::MAX,
        sample_size: 10,
        warm_up_ms: 500,
        measure_ms: 1200,
        flat_sampling: true,
    },
];

impl RuntimePreset {
    pub fn for_len(len: usize) -> Self {
        RUNTIME_PRESETS
            .into_iter()
            .find(|preset| len <= preset.max_len)
            .unwrap_or(RUNTIME_PRESETS[RUNTIME_PRESETS.len() - 1])
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(Duration::from_millis(self.warm_up_ms));
        group.measurement_time(Duration::from_millis(self.measure_ms));
        group.sampling_mode(if self.flat_sampling {
            SamplingMode::Flat
        } else {
            SamplingMode::Auto
        });
    }
}

pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    RuntimePreset::for_len(len).apply(group);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Reversed,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Reversed,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Reversed => "reversed",
        }
    }
}

pub fn generate_u64<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, len: usize) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random::<u64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data = (0..len as u64).collect::<Vec<_>>();
            if len == 0 {
                return data;
            }
            let swaps = (len / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..len);
                let b = rng.random_range(0..len);
                data.swap(a, b);
            }
            data
        }
        Distribution::Reversed => (0..len as u64).rev().collect(),
    }
}

/// Fixed-width lowercase keys, ordered the same way as the `u64` dataset.
pub fn generate_strings<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    len: usize,
) -> Vec<String> {
    generate_u64(rng, dist, len)
        .into_iter()
        .map(|value| {
            let mut key = String::with_capacity(STRING_KEY_LEN);
            let mut rest = value;
            for _ in 0..STRING_KEY_LEN {
                key.push(char::from(b'a' + (rest % 26) as u8));
                rest /= 26;
            }
            key.chars().rev().collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_selection_by_len() {
        assert_eq!(RuntimePreset::for_len(0), RUNTIME_PRESETS[0]);
        assert_eq!(RuntimePreset::for_len(16384), RUNTIME_PRESETS[0]);
        assert_eq!(RuntimePreset::for_len(16385), RUNTIME_PRESETS[1]);
        assert_eq!(RuntimePreset::for_len(65536), RUNTIME_PRESETS[1]);
        assert_eq!(RuntimePreset::for_len(262144), RUNTIME_PRESETS[2]);
        assert_eq!(RuntimePreset::for_len(usize::MAX), RUNTIME_PRESETS[2]);
    }

    #[test]
    fn presets_are_ordered_by_len() {
        assert!(RUNTIME_PRESETS.windows(2).all(|w| w[0].max_len < w[1].max_len));
        assert_eq!(RUNTIME_PRESETS[RUNTIME_PRESETS.len() - 1].max_len, usize::MAX);
    }

    #[test]
    fn datasets_have_requested_len() {
        let mut rng = default_rng();
        for dist in ALL_DISTRIBUTIONS {
            for len in [0_usize, 1, 99, 1000] {
                assert_eq!(generate_u64(&mut rng, dist, len).len(), len);
                assert_eq!(generate_strings(&mut rng, dist, len).len(), len);
            }
        }
    }

    #[test]
    fn reversed_is_descending() {
        let mut rng = default_rng();
        let data = generate_u64(&mut rng, Distribution::Reversed, 64);
        assert!(data.windows(2).all(|w| w[0] > w[1]));

        let keys = generate_strings(&mut rng, Distribution::Reversed, 64);
        assert!(keys.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = generate_u64(&mut rng, Distribution::NearlySorted1pctSwaps, 1000);
        data.sort_unstable();
        assert_eq!(data, (0..1000).collect::<Vec<u64>>());
    }
}
