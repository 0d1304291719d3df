#![allow(dead_code)]

use mmc_sim::DistributionSampler;

/// Check whether two floats have a relative difference of at most 5e-5 times the smaller value.
#[macro_export]
macro_rules! assert_floats_near_equal {
    ($val1:expr, $val2:expr, $msg:expr) => {{
        let a: f64 = $val1;
        let b: f64 = $val2;
        let diff = (a - b).abs();
        let relative_diff = if a.abs() < b.abs() { diff / a.abs() } else { diff / b.abs() };
        assert!(relative_diff < 0.00005, "{}: {} vs {}", $msg, a, b);
    }};
}

/// Sampler that always returns the requested mean, turning a run into a deterministic D/D/c system.
#[derive(Debug, Default)]
pub struct MeanSampler;

impl DistributionSampler for MeanSampler {
    fn sample(&mut self, mean: f64) -> f64 {
        mean
    }
}

/// Sampler that replays a fixed script of durations, ignoring the requested mean.
#[derive(Debug)]
pub struct ScriptedSampler {
    draws: std::vec::IntoIter<f64>,
}

impl ScriptedSampler {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws: draws.into_iter() }
    }
}

impl DistributionSampler for ScriptedSampler {
    fn sample(&mut self, _: f64) -> f64 {
        // an exhausted script produces an invalid draw, which the engine rejects
        self.draws.next().unwrap_or(f64::NAN)
    }
}

/// Mean of a slice of floats, zero when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
