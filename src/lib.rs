//! # Overview
//!
//! mmc-sim is a discrete-event simulation of a multi-server waiting line, the M/M/c model of queueing theory. Calls
//! arrive at random, go straight to one of `c` identical agents if one is free, and otherwise wait in a first-in,
//! first-out line. A run replays events over one logical clock up to a fixed horizon and reports the average wait, the
//! average queue length, agent utilization, and throughput.
//!
//! The pieces of a run are exposed individually so that each can be inspected or tested on its own:
//!
//! * [`EventClock`] holds the simulated time, the single pending arrival, and a min-heap of pending departures. It
//!   always selects the earliest event and breaks exact ties in favor of the arrival.
//! * [`ServerPool`] admits a call when an agent is free and otherwise refuses it.
//! * [`WaitingQueue`] lines up refused calls by arrival time.
//! * [`MetricsAccumulator`] integrates busy agent-time, samples the queue length at every event, and records the wait
//!   of every call as it begins service.
//! * [`SimulationEngine`] ties them together, drawing durations from an injected [`DistributionSampler`].
//!
//! The simplest entry point is [`run_simulation()`]:
//!
//! ```
//! use mmc_sim::{run_simulation, ExponentialSampler};
//!
//! let sampler = ExponentialSampler::seed_from_u64(7);
//! let summary = run_simulation(0.8, 1.0, 2, 1000.0, sampler).expect("parameters are valid");
//! assert!(summary.utilization < 1.0);
//! ```
//!
//! # Determinism
//!
//! A run owns its sampler and shares no mutable state with anything else, so a fixed configuration and a fixed sampler
//! seed always reproduce the same events and the same [`SummaryMetrics`], bit for bit. The same isolation lets
//! independent runs execute on separate threads, which [`run_batch_parallel()`] does for a [`BatchConfig`].

mod batch;
mod clock;
mod config;
mod engine;
mod error;
pub mod logging;
mod metrics;
mod sampler;
mod server_pool;
mod waiting_queue;

pub use batch::{run_batch, run_batch_parallel, BatchConfig, Scenario};
pub use clock::{Event, EventClock, EventKind};
pub use config::SimulationConfig;
pub use engine::{run_simulation, Phase, SimulationEngine};
pub use error::{Error, Result};
pub use metrics::{MetricsAccumulator, SummaryMetrics};
pub use sampler::{DistributionSampler, ExponentialSampler};
pub use server_pool::ServerPool;
pub use waiting_queue::WaitingQueue;
