use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use rand_pcg::Pcg64;

/// A source of random durations for inter-arrival and service times.
///
/// Each run owns its sampler exclusively, so independent runs never share a random stream. Implementations must return
/// a finite, non-negative value for every strictly positive `mean`; the engine checks each draw and halts with an
/// [`Error::SamplerContractViolation`] otherwise.
///
/// [`Error::SamplerContractViolation`]: crate::Error::SamplerContractViolation
pub trait DistributionSampler {
    /// Draw a duration whose expected value is `mean`.
    fn sample(&mut self, mean: f64) -> f64;
}

impl<S> DistributionSampler for &mut S
where
    S: DistributionSampler + ?Sized,
{
    fn sample(&mut self, mean: f64) -> f64 {
        (**self).sample(mean)
    }
}

/// Exponentially distributed durations drawn from a PCG stream.
///
/// Two samplers built from the same seed produce identical sequences, which in turn makes whole simulation runs
/// reproducible.
#[derive(Debug, Clone)]
pub struct ExponentialSampler {
    rng: Pcg64,
}

impl ExponentialSampler {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Seed a new stream from another generator, e.g. `rand::rng()` for a non-reproducible run.
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        Self {
            rng: Pcg64::from_rng(rng),
        }
    }
}

impl DistributionSampler for ExponentialSampler {
    fn sample(&mut self, mean: f64) -> f64 {
        // an invalid mean yields NaN, which the engine reports as a contract violation
        match Exp::new(1.0 / mean) {
            Ok(distribution) => distribution.sample(&mut self.rng),
            Err(_) => f64::NAN,
        }
    }
}
