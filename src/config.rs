use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for a single simulation run.
///
/// Rates are expressed in events per unit of simulated time, so the mean inter-arrival time is `1 / arrival_rate` and
/// the mean service time is `1 / service_rate`. All values are checked by [`validate()`] before a run starts.
///
/// [`validate()`]: SimulationConfig::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub num_agents: usize,
    pub horizon: f64,
}

impl SimulationConfig {
    /// Build and validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Configuration`] naming the first parameter that is out of range.
    pub fn new(arrival_rate: f64, service_rate: f64, num_agents: usize, horizon: f64) -> Result<Self> {
        let config = Self {
            arrival_rate,
            service_rate,
            num_agents,
            horizon,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both rates and the horizon are finite and strictly positive, and that at least one agent exists.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Configuration`] naming the first parameter that is out of range.
    pub fn validate(&self) -> Result {
        positive_finite("arrival_rate", self.arrival_rate)?;
        positive_finite("service_rate", self.service_rate)?;
        if self.num_agents < 1 {
            return Err(Error::Configuration {
                parameter: "num_agents",
                value: self.num_agents as f64,
                requirement: "must be at least 1",
            });
        }
        positive_finite("horizon", self.horizon)
    }

    pub fn arrival_mean(&self) -> f64 {
        1.0 / self.arrival_rate
    }

    pub fn service_mean(&self) -> f64 {
        1.0 / self.service_rate
    }

    /// Offered load per agent, `λ / (c·μ)`. Values at or above one describe a system whose queue grows without bound.
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / (self.num_agents as f64 * self.service_rate)
    }
}

fn positive_finite(parameter: &'static str, value: f64) -> Result {
    // NaN fails both comparisons
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::Configuration {
            parameter,
            value,
            requirement: "must be finite and greater than zero",
        })
    }
}
