use thiserror::Error;

/// Errors that may be encountered while configuring or executing a simulation.
///
/// The [`Configuration`] variant is the only one client code should expect to see in normal use: it is returned before
/// any simulation work happens whenever a rate, agent count, or horizon is out of range. The [`Parse`] and [`Io`]
/// variants cover loading a [`BatchConfig`] from disk.
///
/// The remaining variants guard internal invariants of the [`EventClock`] and [`WaitingQueue`], or the contract of an
/// injected [`DistributionSampler`]. Under correct orchestration by the [`SimulationEngine`] they never fire, so seeing
/// one means a logical bug at the call site or a misbehaving sampler. None of them are retried.
///
/// [`Configuration`]: Error::Configuration
/// [`Parse`]: Error::Parse
/// [`Io`]: Error::Io
/// [`BatchConfig`]: crate::BatchConfig
/// [`EventClock`]: crate::EventClock
/// [`WaitingQueue`]: crate::WaitingQueue
/// [`DistributionSampler`]: crate::DistributionSampler
/// [`SimulationEngine`]: crate::SimulationEngine
#[derive(Debug, Error)]
pub enum Error {
    /// A simulation parameter was rejected before the run started.
    #[error("invalid configuration: {parameter} = {value} ({requirement})")]
    Configuration {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// A dequeue was attempted on a waiting queue with no calls in it.
    #[error("cannot dequeue from an empty waiting queue")]
    EmptyQueue,

    /// The next pending event lies at or beyond the end of the run.
    #[error("next event at {time} is at or beyond the horizon {horizon}")]
    HorizonExceeded { time: f64, horizon: f64 },

    /// The injected sampler produced a draw that is NaN, infinite, or negative.
    #[error("sampler returned {value} for mean {mean}; draws must be finite and non-negative")]
    SamplerContractViolation { mean: f64, value: f64 },

    /// The event clock rejected an event that would have been scheduled for a time that has already passed.
    #[error("event time {time} is less than current simulation time {now}")]
    BackInTime { time: f64, now: f64 },

    /// A NaN timestamp was offered to the event clock.
    #[error("event time is NaN")]
    InvalidTime,

    #[error("failed to parse batch configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read batch configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// [`std::result::Result`]`<T, `[`mmc_sim::Error`]`>`, defaulting to `T = ()`.
///
/// [`mmc_sim::Error`]: Error
pub type Result<T = ()> = std::result::Result<T, Error>;
