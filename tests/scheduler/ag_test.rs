/*!
 * AG Tests
 * Adaptive quantum transitions and quantum history
 */

use cpu_sched_sim::scheduler::ag;
use cpu_sched_sim::{ProcessSpec, Tick};
use pretty_assertions::assert_eq;

fn spec(name: &str, arrival: Tick, burst: Tick, priority: i32, quantum: Tick) -> ProcessSpec {
    ProcessSpec::new(name, arrival, burst, priority).with_quantum(quantum)
}

#[test]
fn test_mixed_transitions() {
    let workload = vec![
        spec("P1", 0, 6, 3, 4),
        spec("P2", 1, 3, 1, 2),
        spec("P3", 2, 4, 2, 3),
    ];
    let result = ag::simulate(&workload).unwrap();

    assert_eq!(
        result.trace.names(),
        vec!["P1", "P2", "P1", "P2", "P3", "P1", "P3", "P1"]
    );

    let p1 = result.process("P1").unwrap();
    assert_eq!(p1.quantum_history, vec![4, 6, 8, 11, 0]);
    assert_eq!(p1.completion, 13);
    assert_eq!(p1.waiting, 7);

    let p2 = result.process("P2").unwrap();
    assert_eq!(p2.quantum_history, vec![2, 4, 0]);
    assert_eq!(p2.completion, 6);
    assert_eq!(p2.waiting, 2);

    let p3 = result.process("P3").unwrap();
    assert_eq!(p3.quantum_history, vec![3, 5, 0]);
    assert_eq!(p3.completion, 12);
    assert_eq!(p3.waiting, 6);
}

#[test]
fn test_shortest_job_rule_with_equal_priorities() {
    // Equal priorities: only quantum exhaustion and the shortest-job rule move the CPU
    let workload = vec![spec("A", 0, 4, 1, 2), spec("B", 0, 4, 1, 2)];
    let result = ag::simulate(&workload).unwrap();

    assert_eq!(result.trace.names(), vec!["A", "B", "A", "B"]);
    assert_eq!(result.process("A").unwrap().quantum_history, vec![2, 4, 0]);
    // B yields to A at tick 3 with one tick unused
    assert_eq!(result.process("B").unwrap().quantum_history, vec![2, 3, 0]);
    assert_eq!(result.process("B").unwrap().completion, 8);
}

#[test]
fn test_idle_gap_before_arrival() {
    let workload = vec![spec("A", 2, 2, 1, 3)];
    let result = ag::simulate(&workload).unwrap();

    assert_eq!(result.process("A").unwrap().completion, 4);
    assert_eq!(result.trace.slices()[0].start, 2);
}

#[test]
fn test_priority_rule_only_at_first_quarter() {
    // B is more urgent but arrives at tick 3, after A's quarter point (2);
    // A keeps the CPU for its whole quantum of 8
    let workload = vec![spec("A", 0, 10, 5, 8), spec("B", 3, 9, 1, 2)];
    let result = ag::simulate(&workload).unwrap();

    assert_eq!(result.trace.slices()[0].name, "A");
    assert_eq!(result.trace.slices()[0].end, 8);

    // B then yields to A's 2 remaining ticks under the SJF rule
    assert_eq!(result.trace.names(), vec!["A", "B", "A", "B"]);

    let a = result.process("A").unwrap();
    assert_eq!(a.quantum_history, vec![8, 10, 0]);
    assert_eq!(a.completion, 11);

    let b = result.process("B").unwrap();
    assert_eq!(b.quantum_history, vec![2, 3, 5, 0]);
    assert_eq!(b.completion, 19);
}

#[test]
fn test_arrival_queues_ahead_of_exhausted_process() {
    // B arrives on the tick A exhausts its quantum and is queued first
    let workload = vec![spec("A", 0, 5, 1, 2), spec("B", 2, 3, 1, 2)];
    let result = ag::simulate(&workload).unwrap();

    assert_eq!(result.trace.names(), vec!["A", "B", "A", "B"]);

    let a = result.process("A").unwrap();
    assert_eq!(a.quantum_history, vec![2, 4, 0]);
    assert_eq!(a.completion, 7);
    assert_eq!(a.waiting, 2);

    let b = result.process("B").unwrap();
    assert_eq!(b.quantum_history, vec![2, 4, 0]);
    assert_eq!(b.completion, 8);
}
