use crate::{
    DistributionSampler, Error, Event, EventClock, EventKind, MetricsAccumulator, Result, ServerPool,
    SimulationConfig, SummaryMetrics, WaitingQueue,
};
use std::fmt::Formatter;
use tracing::{debug, trace};

/// Lifecycle of a [`SimulationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Finished,
}

/// Drives one M/M/c run: owns the clock, agents, waiting line, metrics, and the sampler feeding them durations.
///
/// The expected workflow is:
///
/// 1. Build a [`SimulationConfig`] and pick a [`DistributionSampler`].
/// 2. Pass both to [`new()`], which schedules the first arrival.
/// 3. Either call [`run()`] to reach the horizon in one go, or call [`step()`] repeatedly to inspect the state between
///    events and then [`finish()`].
///
/// Every value the engine produces is a function of the configuration and the sampler's output stream, so two engines
/// fed identical streams produce bit-identical [`SummaryMetrics`].
///
/// [`new()`]: SimulationEngine::new
/// [`run()`]: SimulationEngine::run
/// [`step()`]: SimulationEngine::step
/// [`finish()`]: SimulationEngine::finish
#[derive(Debug)]
pub struct SimulationEngine<Sampler>
where
    Sampler: DistributionSampler,
{
    config: SimulationConfig,
    clock: EventClock,
    servers: ServerPool,
    queue: WaitingQueue,
    metrics: MetricsAccumulator,
    sampler: Sampler,
    phase: Phase,
}

impl<Sampler> SimulationEngine<Sampler>
where
    Sampler: DistributionSampler,
{
    /// Validate `config` and set up an empty system at time zero with the first arrival drawn from `sampler`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for out-of-range parameters, or [`Error::SamplerContractViolation`] if the
    /// first draw is invalid.
    pub fn new(config: SimulationConfig, mut sampler: Sampler) -> Result<Self> {
        config.validate()?;
        let first_arrival = draw(&mut sampler, config.arrival_mean())?;

        debug!(
            agents = config.num_agents,
            arrival_rate = config.arrival_rate,
            service_rate = config.service_rate,
            horizon = config.horizon,
            first_arrival,
            "Starting simulation"
        );

        Ok(Self {
            clock: EventClock::new(config.horizon, first_arrival)?,
            servers: ServerPool::new(config.num_agents),
            queue: WaitingQueue::new(),
            metrics: MetricsAccumulator::new(),
            sampler,
            phase: Phase::Running,
            config,
        })
    }

    /// Process the next event, or move to [`Phase::Finished`] if it lies at or beyond the horizon.
    ///
    /// Returns the processed event, or `None` once the run is finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SamplerContractViolation`] if the sampler produces an invalid duration. Any other error points
    /// to a broken invariant inside the engine. Either way the run should be abandoned.
    pub fn step(&mut self) -> Result<Option<Event>> {
        if self.phase == Phase::Finished {
            return Ok(None);
        }

        if self.clock.peek().time >= self.config.horizon {
            self.phase = Phase::Finished;
            return Ok(None);
        }

        let previous_time = self.clock.current_time();
        let event = self.clock.next_event()?;
        self.metrics.advance(event.time - previous_time, self.servers.busy());
        self.metrics.record_sample(event.time, self.queue.len());

        match event.kind {
            EventKind::Arrival => self.handle_arrival(event.time)?,
            EventKind::Departure => self.handle_departure(event.time)?,
        }

        trace!(
            time = event.time,
            kind = ?event.kind,
            busy = self.servers.busy(),
            queue_len = self.queue.len(),
            "Processed event"
        );
        Ok(Some(event))
    }

    /// Admit the call if an agent is free, otherwise put it in line. Either way, schedule the next arrival.
    fn handle_arrival(&mut self, now: f64) -> Result {
        if self.servers.try_admit() {
            self.begin_service(now, 0.0)?;
        } else {
            self.queue.enqueue(now);
        }

        let inter_arrival = draw(&mut self.sampler, self.config.arrival_mean())?;
        self.clock.replace_arrival(now + inter_arrival)
    }

    /// Hand the freed agent to the longest-waiting call, or let it go idle if nobody is waiting.
    fn handle_departure(&mut self, now: f64) -> Result {
        if self.queue.is_empty() {
            self.servers.release();
            return Ok(());
        }

        let arrival_time = self.queue.dequeue()?;
        self.begin_service(now, now - arrival_time)
    }

    fn begin_service(&mut self, now: f64, wait: f64) -> Result {
        self.metrics.record_wait(wait);
        let service_time = draw(&mut self.sampler, self.config.service_mean())?;
        self.clock.schedule_departure(now + service_time)
    }

    /// Step until the horizon is reached, then summarize the run.
    ///
    /// # Errors
    ///
    /// Forwards the first error returned by [`step()`].
    ///
    /// [`step()`]: SimulationEngine::step
    pub fn run(mut self) -> Result<SummaryMetrics> {
        while self.step()?.is_some() {}
        Ok(self.finish())
    }

    /// Summarize the events processed so far over the full configured horizon.
    pub fn finish(self) -> SummaryMetrics {
        let summary = self.metrics.finalize(self.config.horizon, self.config.num_agents);
        debug!(
            agents = summary.agents,
            events = summary.time_points.len(),
            calls_served = summary.calls_served,
            utilization = summary.utilization,
            "Simulation finished"
        );
        summary
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    pub fn busy_agents(&self) -> usize {
        self.servers.busy()
    }

    pub fn pending_departures(&self) -> usize {
        self.clock.pending_departures()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Shared access to the metrics gathered so far.
    pub fn metrics(&self) -> &MetricsAccumulator {
        &self.metrics
    }
}

impl<Sampler> std::fmt::Display for SimulationEngine<Sampler>
where
    Sampler: DistributionSampler,
{
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Simulation ({:?}) at time {} with {}/{} agents busy and {} waiting",
            self.phase,
            self.clock.current_time(),
            self.servers.busy(),
            self.servers.num_agents(),
            self.queue.len()
        )
    }
}

/// Draw a duration and hold the sampler to its contract.
fn draw<Sampler>(sampler: &mut Sampler, mean: f64) -> Result<f64>
where
    Sampler: DistributionSampler,
{
    let value = sampler.sample(mean);
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::SamplerContractViolation { mean, value })
    }
}

/// Run a complete simulation and return its summary.
///
/// # Errors
///
/// Returns [`Error::Configuration`] before doing any work if a parameter is out of range, or
/// [`Error::SamplerContractViolation`] if `sampler` produces an invalid duration.
pub fn run_simulation<Sampler>(
    arrival_rate: f64,
    service_rate: f64,
    num_agents: usize,
    horizon: f64,
    sampler: Sampler,
) -> Result<SummaryMetrics>
where
    Sampler: DistributionSampler,
{
    let config = SimulationConfig::new(arrival_rate, service_rate, num_agents, horizon)?;
    SimulationEngine::new(config, sampler)?.run()
}
