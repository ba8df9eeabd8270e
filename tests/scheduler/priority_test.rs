/*!
 * Priority Tests
 * Preemptive priority selection, tie-breaks and aging
 */

use cpu_sched_sim::scheduler::priority;
use cpu_sched_sim::ProcessSpec;
use pretty_assertions::assert_eq;

#[test]
fn test_static_priorities() {
    let workload = vec![
        ProcessSpec::new("P1", 0, 10, 3),
        ProcessSpec::new("P2", 0, 1, 1),
        ProcessSpec::new("P3", 0, 2, 4),
        ProcessSpec::new("P4", 0, 1, 5),
        ProcessSpec::new("P5", 0, 5, 2),
    ];
    let result = priority::simulate(&workload, 0, 0).unwrap();

    assert_eq!(result.trace.names(), vec!["P2", "P5", "P1", "P3", "P4"]);

    let waits: Vec<u64> = result.processes.iter().map(|p| p.waiting).collect();
    assert_eq!(waits, vec![6, 0, 16, 18, 1]);
    assert_eq!(result.average_waiting(), 8.2);
}

#[test]
fn test_aged_process_overtakes_only_when_strictly_better() {
    // B ages 10 -> 9 -> ... every 2 ticks from tick 3; it ties A (3) at tick 15,
    // which keeps A on the CPU, and overtakes at tick 17
    let workload = vec![ProcessSpec::new("A", 0, 20, 3), ProcessSpec::new("B", 1, 3, 10)];
    let result = priority::simulate(&workload, 0, 2).unwrap();

    assert_eq!(result.trace.slices()[0].name, "A");
    assert_eq!(result.trace.slices()[0].end, 17);
    assert_eq!(result.trace.slices()[1].name, "B");

    // Waiting A ages in turn, so the two alternate until B finishes
    assert_eq!(result.trace.names(), vec!["A", "B", "A", "B", "A"]);
    assert_eq!(result.process("B").unwrap().completion, 22);
    assert_eq!(result.process("A").unwrap().completion, 23);
}

#[test]
fn test_without_aging_low_priority_starves_until_idle() {
    let workload = vec![ProcessSpec::new("A", 0, 20, 3), ProcessSpec::new("B", 1, 3, 10)];
    let result = priority::simulate(&workload, 0, 0).unwrap();

    assert_eq!(result.trace.names(), vec!["A", "B"]);
    assert_eq!(result.process("B").unwrap().completion, 23);
}

#[test]
fn test_aging_continues_during_context_switch() {
    // B (priority 1) preempts A (priority 2) at tick 1. A ages to 1 during the
    // 3-tick switch, then outranks B on arrival order and takes the CPU back
    // after a single tick of B. B resumes after A completes without a switch.
    let workload = vec![ProcessSpec::new("A", 0, 4, 2), ProcessSpec::new("B", 1, 2, 1)];
    let result = priority::simulate(&workload, 3, 1).unwrap();

    assert_eq!(result.trace.names(), vec!["A", "B", "A", "B"]);
    assert_eq!(result.trace.slices()[1].start, 4);
    assert_eq!(result.trace.slices()[2].start, 8);
    assert_eq!(result.process("A").unwrap().completion, 11);
    assert_eq!(result.process("B").unwrap().completion, 12);
}
