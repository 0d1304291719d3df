use crate::{ExponentialSampler, Result, SimulationConfig, SimulationEngine, SummaryMetrics};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::thread;
use tracing::info;

/// One entry of a batch: an agent count and the rates to simulate it with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub agents: usize,
    pub arrival_rate: f64,
    pub service_rate: f64,
}

impl Scenario {
    pub fn config(&self, horizon: f64) -> Result<SimulationConfig> {
        SimulationConfig::new(self.arrival_rate, self.service_rate, self.agents, horizon)
    }
}

/// An ordered list of scenarios sharing one horizon and one base seed.
///
/// In TOML form:
///
/// ```toml
/// horizon = 1000.0
/// seed = 42
///
/// [[scenario]]
/// agents = 2
/// arrival_rate = 0.8
/// service_rate = 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_horizon")]
    pub horizon: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

fn default_horizon() -> f64 {
    1000.0
}

fn default_seed() -> u64 {
    42
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            seed: default_seed(),
            scenarios: (1..=3)
                .map(|agents| Scenario {
                    agents,
                    arrival_rate: 0.8,
                    service_rate: 1.0,
                })
                .collect(),
        }
    }
}

impl BatchConfig {
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed TOML.
    ///
    /// [`Error::Parse`]: crate::Error::Parse
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`] for malformed TOML.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::Parse`]: crate::Error::Parse
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Seed for the scenario at `index`, independent of the order scenarios execute in.
    pub fn scenario_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    fn run_scenario(&self, index: usize, scenario: &Scenario) -> Result<SummaryMetrics> {
        let config = scenario.config(self.horizon)?;
        let sampler = ExponentialSampler::seed_from_u64(self.scenario_seed(index));
        let summary = SimulationEngine::new(config, sampler)?.run()?;
        info!(
            scenario = index,
            agents = summary.agents,
            avg_wait = summary.avg_wait,
            utilization = summary.utilization,
            "Scenario complete"
        );
        Ok(summary)
    }
}

/// Run every scenario in order on the calling thread.
///
/// # Errors
///
/// Stops at the first scenario that fails, typically with an [`Error::Configuration`].
///
/// [`Error::Configuration`]: crate::Error::Configuration
pub fn run_batch(batch: &BatchConfig) -> Result<Vec<SummaryMetrics>> {
    batch
        .scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| batch.run_scenario(index, scenario))
        .collect()
}

/// Run every scenario on its own scoped thread. Each run owns its sampler, so the results are identical to those of
/// [`run_batch`] and are returned in scenario order.
///
/// # Errors
///
/// Reports the error of the first failing scenario in scenario order.
pub fn run_batch_parallel(batch: &BatchConfig) -> Result<Vec<SummaryMetrics>> {
    thread::scope(|scope| {
        let handles: Vec<_> = batch
            .scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| scope.spawn(move || batch.run_scenario(index, scenario)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    })
}
