use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Online accumulators for a single run, updated once per processed event.
///
/// Queue length is sampled at every event rather than integrated over time, so periods with many events weigh more
/// heavily in [`SummaryMetrics::avg_queue_len`] than quiet ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsAccumulator {
    busy_time_integral: f64,
    wait_times: Vec<f64>,
    time_points: Vec<f64>,
    queue_lengths: Vec<usize>,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate `busy_count` agents over an interval of length `dt`, the time elapsed since the previous event.
    pub fn advance(&mut self, dt: f64, busy_count: usize) {
        self.busy_time_integral += busy_count as f64 * dt;
    }

    pub fn record_sample(&mut self, time: f64, queue_length: usize) {
        self.time_points.push(time);
        self.queue_lengths.push(queue_length);
    }

    /// Record the time a call spent in line before an agent picked it up; zero for calls admitted on arrival.
    pub fn record_wait(&mut self, wait: f64) {
        self.wait_times.push(wait);
    }

    pub fn busy_time_integral(&self) -> f64 {
        self.busy_time_integral
    }

    /// Waits in the order calls began service.
    pub fn wait_times(&self) -> &[f64] {
        &self.wait_times
    }

    /// Reduce the accumulators into summary statistics for a run of length `horizon` with `num_agents` agents.
    pub fn finalize(self, horizon: f64, num_agents: usize) -> SummaryMetrics {
        let calls_served = self.wait_times.len();
        let avg_wait = mean(self.wait_times.iter().copied());
        let avg_queue_len = mean(self.queue_lengths.iter().map(|&length| length as f64));

        SummaryMetrics {
            agents: num_agents,
            avg_wait,
            avg_queue_len,
            utilization: self.busy_time_integral / (horizon * num_agents as f64),
            throughput: calls_served as f64 / horizon,
            calls_served,
            time_points: self.time_points,
            queue_lengths: self.queue_lengths,
        }
    }
}

/// Mean of `values`, or zero when there are none.
fn mean<I>(values: I) -> f64
where
    I: ExactSizeIterator<Item = f64>,
{
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Results of one simulation run.
///
/// `time_points` and `queue_lengths` are parallel series holding one entry per processed event: its timestamp and the
/// number of calls in line just before the event was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub agents: usize,
    /// Mean time from arrival to start of service over all calls that reached an agent.
    pub avg_wait: f64,
    pub avg_queue_len: f64,
    /// Busy agent-time divided by total agent-time available over the horizon.
    pub utilization: f64,
    /// Service starts per unit of simulated time.
    pub throughput: f64,
    pub calls_served: usize,
    pub time_points: Vec<f64>,
    pub queue_lengths: Vec<usize>,
}

impl std::fmt::Display for SummaryMetrics {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Agents: {} | Avg wait: {:.3} | Avg queue: {:.3} | Utilization: {:.1}% | Throughput: {:.3}/t ({} calls)",
            self.agents,
            self.avg_wait,
            self.avg_queue_len,
            self.utilization * 100.0,
            self.throughput,
            self.calls_served,
        )
    }
}
