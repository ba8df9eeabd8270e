/*!
 * SJF Tests
 * Preemptive shortest-remaining-time-first behaviour
 */

use cpu_sched_sim::scheduler::sjf;
use cpu_sched_sim::{ProcessSpec, SchedulerError};
use pretty_assertions::assert_eq;

fn textbook() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 8, 1),
        ProcessSpec::new("P2", 1, 4, 1),
        ProcessSpec::new("P3", 2, 9, 1),
        ProcessSpec::new("P4", 3, 5, 1),
    ]
}

#[test]
fn test_preemption_example() {
    let workload = vec![ProcessSpec::new("A", 0, 5, 1), ProcessSpec::new("B", 1, 2, 1)];
    let result = sjf::simulate(&workload, 0).unwrap();

    assert_eq!(result.trace.names(), vec!["A", "B", "A"]);
    assert_eq!(result.process("A").unwrap().waiting, 2);
    assert_eq!(result.process("B").unwrap().waiting, 0);
    assert_eq!(result.process("A").unwrap().turnaround, 7);
}

#[test]
fn test_textbook_srtf() {
    let result = sjf::simulate(&textbook(), 0).unwrap();

    assert_eq!(result.trace.names(), vec!["P1", "P2", "P4", "P1", "P3"]);

    let waits: Vec<u64> = result.processes.iter().map(|p| p.waiting).collect();
    assert_eq!(waits, vec![9, 0, 15, 2]);
    assert_eq!(result.average_waiting(), 6.5);
}

#[test]
fn test_context_switch_delays_everyone() {
    let without = sjf::simulate(&textbook(), 0).unwrap();
    let with = sjf::simulate(&textbook(), 1).unwrap();

    assert_eq!(with.trace.names(), without.trace.names());
    assert!(with.average_turnaround() > without.average_turnaround());
}

#[test]
fn test_input_is_not_mutated() {
    let workload = textbook();
    let snapshot = workload.clone();
    sjf::simulate(&workload, 2).unwrap();
    assert_eq!(workload, snapshot);
}

#[test]
fn test_empty_workload_rejected() {
    assert_eq!(sjf::simulate(&[], 0), Err(SchedulerError::EmptyWorkload));
}
