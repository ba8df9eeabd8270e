/*!
 * Scheduling Invariant Tests
 * Property checks that hold for every policy on arbitrary workloads
 */

use cpu_sched_sim::scheduler::round_robin;
use cpu_sched_sim::{run, Policy, ProcessSpec, SimConfig, SimulationResult, Tick};
use proptest::prelude::*;
use std::collections::HashMap;

const ALL_POLICIES: [Policy; 4] = [Policy::Sjf, Policy::RoundRobin, Policy::Priority, Policy::Ag];

fn workload_strategy() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0u64..20, 1u64..10, 1i32..10, 1u64..6), 1..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority, quantum))| {
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst, priority)
                    .with_quantum(quantum)
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = SimConfig> {
    (0u64..3, 1u64..5, 0u64..4).prop_map(|(context_switch, rr_quantum, aging_interval)| SimConfig {
        context_switch,
        rr_quantum,
        aging_interval,
    })
}

fn check_metrics(workload: &[ProcessSpec], result: &SimulationResult) -> Result<(), TestCaseError> {
    prop_assert_eq!(result.processes.len(), workload.len());

    for spec in workload {
        let metrics = result
            .process(&spec.name)
            .ok_or_else(|| TestCaseError::fail(format!("{} missing from result", spec.name)))?;

        prop_assert_eq!(metrics.turnaround, metrics.completion - spec.arrival);
        prop_assert_eq!(metrics.waiting + spec.burst, metrics.turnaround);
        prop_assert!(metrics.completion >= spec.arrival + spec.burst);
    }
    Ok(())
}

fn check_trace(workload: &[ProcessSpec], result: &SimulationResult) -> Result<(), TestCaseError> {
    let arrivals: HashMap<&str, Tick> = workload.iter().map(|p| (p.name.as_str(), p.arrival)).collect();
    let mut executed: HashMap<&str, Tick> = HashMap::new();

    let slices = result.trace.slices();
    for slice in slices {
        prop_assert!(slice.start < slice.end, "empty slice {:?}", slice);
        prop_assert!(slice.start >= arrivals[slice.name.as_str()], "{:?} before arrival", slice);
        *executed.entry(slice.name.as_str()).or_default() += slice.end - slice.start;
    }

    for pair in slices.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "overlap {:?}", pair);
    }

    for spec in workload {
        prop_assert_eq!(executed.get(spec.name.as_str()).copied(), Some(spec.burst));
    }

    // Consecutive order entries never repeat a name
    for pair in result.trace.order().windows(2) {
        prop_assert_ne!(&pair[0], &pair[1]);
    }
    Ok(())
}

fn check_quantum_history(
    workload: &[ProcessSpec],
    result: &SimulationResult,
) -> Result<(), TestCaseError> {
    for spec in workload {
        let history = match result.process(&spec.name) {
            Some(metrics) => &metrics.quantum_history,
            None => return Err(TestCaseError::fail(format!("{} missing from result", spec.name))),
        };

        prop_assert_eq!(history.first().copied(), Some(spec.quantum));
        prop_assert_eq!(history.last().copied(), Some(0));
        prop_assert_eq!(history.iter().filter(|&&q| q == 0).count(), 1);

        let growth = &history[..history.len() - 1];
        prop_assert!(growth.windows(2).all(|w| w[0] <= w[1]), "history {:?}", history);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_metrics_consistent(workload in workload_strategy(), config in config_strategy()) {
        for policy in ALL_POLICIES {
            let result = run(policy, &workload, &config).unwrap();
            prop_assert_eq!(result.policy, policy);
            check_metrics(&workload, &result)?;
        }
    }

    #[test]
    fn prop_trace_accounts_for_every_burst(workload in workload_strategy(), config in config_strategy()) {
        for policy in ALL_POLICIES {
            let result = run(policy, &workload, &config).unwrap();
            check_trace(&workload, &result)?;
        }
    }

    #[test]
    fn prop_simulation_is_deterministic(workload in workload_strategy(), config in config_strategy()) {
        for policy in ALL_POLICIES {
            let first = run(policy, &workload, &config).unwrap();
            let second = run(policy, &workload, &config).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_ag_quantum_history_shape(workload in workload_strategy()) {
        let result = run(Policy::Ag, &workload, &SimConfig::default()).unwrap();
        check_quantum_history(&workload, &result)?;
    }

    #[test]
    fn prop_lone_round_robin_process_never_waits(
        arrival in 0u64..20,
        burst in 1u64..30,
        context_switch in 0u64..5,
        quantum in 1u64..8,
    ) {
        let workload = vec![ProcessSpec::new("P1", arrival, burst, 1)];
        let result = round_robin::simulate(&workload, context_switch, quantum).unwrap();
        let metrics = result.process("P1").unwrap();

        prop_assert_eq!(metrics.waiting, 0);
        prop_assert_eq!(metrics.completion, arrival + burst);
    }
}
