mod util;

use mmc_sim::*;
use util::{mean, MeanSampler, ScriptedSampler};

fn seeded_run(seed: u64, arrival_rate: f64, service_rate: f64, num_agents: usize, horizon: f64) -> SummaryMetrics {
    let sampler = ExponentialSampler::seed_from_u64(seed);
    run_simulation(arrival_rate, service_rate, num_agents, horizon, sampler)
        .expect("simulation should complete normally")
}

#[test]
fn same_seed_reproduces_run() {
    let first = seeded_run(8_675_309, 0.8, 1.0, 2, 1000.0);
    let second = seeded_run(8_675_309, 0.8, 1.0, 2, 1000.0);
    assert_eq!(first, second, "runs with the same seed diverged");
}

#[test]
fn different_seeds_differ() {
    let first = seeded_run(1, 0.8, 1.0, 2, 1000.0);
    let second = seeded_run(2, 0.8, 1.0, 2, 1000.0);
    assert_ne!(first.time_points, second.time_points, "distinct seeds produced identical event sequences");
}

#[test]
fn two_agent_scenario_is_stable() {
    let summary = seeded_run(2024, 0.8, 1.0, 2, 1000.0);

    assert_eq!(2, summary.agents, "unexpected agent count");
    assert!(summary.utilization < 1.0, "offered load 0.4 should not saturate the agents");
    assert!(
        (0.3..0.5).contains(&summary.utilization),
        "utilization {} far from offered load 0.4",
        summary.utilization
    );
    assert!(
        (0.7..0.9).contains(&summary.throughput),
        "throughput {} far from arrival rate 0.8",
        summary.throughput
    );
    assert!(
        summary.avg_wait >= 0.0 && summary.avg_wait < 1.0,
        "unexpected average wait {}",
        summary.avg_wait
    );
    assert_eq!(summary.time_points.len(), summary.queue_lengths.len(), "series lengths differ");
    assert_floats_near_equal!(
        summary.calls_served as f64 / 1000.0,
        summary.throughput,
        "throughput should count service starts"
    );
}

#[test]
fn horizon_before_first_arrival_is_empty() {
    let config = SimulationConfig::new(0.5, 1.0, 3, 1.0).unwrap();
    let summary = SimulationEngine::new(config, ScriptedSampler::new(vec![5.0]))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(0, summary.calls_served, "no call should have been served");
    assert_eq!(0.0, summary.avg_wait, "average wait should default to zero");
    assert_eq!(0.0, summary.throughput, "throughput should be zero");
    assert_eq!(0.0, summary.utilization, "utilization should be zero");
    assert!(summary.time_points.is_empty(), "no events should have been sampled");
}

#[test]
fn scripted_two_agent_run() {
    let draws = vec![1.0, 4.0, 1.0, 3.0, 1.0, 10.0, 1.0, 2.0, 100.0];
    let config = SimulationConfig::new(1.0, 1.0, 2, 100.0).unwrap();
    let summary = SimulationEngine::new(config, ScriptedSampler::new(draws))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(
        vec![1.0, 2.0, 3.0, 5.0, 5.0, 6.0, 13.0, 15.0],
        summary.time_points,
        "unexpected event times"
    );
    assert_eq!(vec![0, 0, 0, 1, 0, 0, 0, 0], summary.queue_lengths, "unexpected queue samples");
    assert_eq!(4, summary.calls_served, "unexpected service starts");
    assert_eq!(0.5, summary.avg_wait, "call from t=3 should have waited two units");
    assert_eq!(0.125, summary.avg_queue_len, "unexpected average queue length");
    assert_eq!(0.05, summary.utilization, "unexpected utilization");
    assert_eq!(0.04, summary.throughput, "unexpected throughput");
}

#[test]
fn tied_departure_serves_queued_call_without_wait() {
    // every arrival after the second finds both agents busy and lines up, but an agent frees at the same instant
    let summary = run_simulation(1.0, 0.5, 2, 10.0, MeanSampler).unwrap();

    assert_eq!(9, summary.calls_served, "every arrival should reach an agent");
    assert_eq!(0.0, summary.avg_wait, "tied departures should serve queued calls immediately");
    assert_eq!(0.4375, summary.avg_queue_len, "queued calls should appear in the samples");
    assert_eq!(0.75, summary.utilization, "unexpected utilization");
    assert_eq!(0.9, summary.throughput, "unexpected throughput");
}

#[test]
fn exhausted_sampler_is_reported() {
    let config = SimulationConfig::new(1.0, 1.0, 1, 100.0).unwrap();
    let result = SimulationEngine::new(config, ScriptedSampler::new(vec![1.0, 1.0]))
        .unwrap()
        .run();
    assert!(
        matches!(result, Err(Error::SamplerContractViolation { .. })),
        "missing draw should halt the run, got {result:?}"
    );
}

#[test]
fn single_agent_saturates_when_overloaded() {
    let summary = seeded_run(3, 1.5, 1.0, 1, 20_000.0);

    let window_means: Vec<f64> = (0..4)
        .map(|window| {
            let start = 10_000.0 + 2_500.0 * window as f64;
            let end = start + 2_500.0;
            let lengths: Vec<f64> = summary
                .time_points
                .iter()
                .zip(&summary.queue_lengths)
                .filter(|(time, _)| **time >= start && **time < end)
                .map(|(_, &length)| length as f64)
                .collect();
            mean(&lengths)
        })
        .collect();

    for pair in window_means.windows(2) {
        assert!(pair[1] > pair[0], "queue should keep growing: {window_means:?}");
    }
    assert!(summary.utilization > 0.95, "overloaded agent should be nearly always busy");
}

#[test]
fn more_agents_never_hurt() {
    let replications = 20;
    let results: Vec<(f64, f64)> = (2..=4)
        .map(|agents| {
            let runs: Vec<SummaryMetrics> = (0..replications)
                .map(|rep| seeded_run(1_000 + rep, 1.8, 1.0, agents, 2_000.0))
                .collect();
            let waits: Vec<f64> = runs.iter().map(|run| run.avg_wait).collect();
            let utilizations: Vec<f64> = runs.iter().map(|run| run.utilization).collect();
            (mean(&waits), mean(&utilizations))
        })
        .collect();

    for pair in results.windows(2) {
        let ((wait_fewer, util_fewer), (wait_more, util_more)) = (pair[0], pair[1]);
        assert!(wait_more <= wait_fewer + 1e-3, "average wait rose with more agents: {results:?}");
        assert!(util_more <= util_fewer + 1e-3, "utilization rose with more agents: {results:?}");
    }
}
