use std::collections::VecDeque;

use cpu_burst_scheduler::domain::workload::random_bursts;
use cpu_burst_scheduler::error::Error;
use cpu_burst_scheduler::{CpuScheduler, FcfsScheduler, Process, ProcessTable, RoundRobinScheduler, Ticks};

fn waits(table: &ProcessTable) -> Vec<Ticks> {
    table.iter().map(Process::accumulated_wait).collect()
}

/// Queue based Round-Robin trace. All processes arrive at t=0, so a process waits for
/// exactly `completion_time - burst`.
fn reference_round_robin_waits(bursts: &[Ticks], quantum: Ticks) -> (Ticks, Vec<Ticks>) {
    let mut remaining = bursts.to_vec();
    let mut completion = vec![0; bursts.len()];
    let mut queue: VecDeque<usize> = (0..bursts.len()).filter(|&pid| bursts[pid] > 0).collect();
    let mut now = 0;

    while let Some(pid) = queue.pop_front() {
        let slice = quantum.min(remaining[pid]);
        now += slice;
        remaining[pid] -= slice;
        if remaining[pid] == 0 {
            completion[pid] = now;
        } else {
            queue.push_back(pid);
        }
    }

    let waits = bursts.iter().zip(&completion).map(|(&burst, &done)| if burst == 0 { 0 } else { done - burst }).collect();
    (now, waits)
}

#[test]
fn test_fcfs_example() {
    let mut table = ProcessTable::new(&[5, 3, 8]).unwrap();

    let elapsed = FcfsScheduler.run(&mut table).unwrap();

    assert_eq!(elapsed, 16);
    assert_eq!(waits(&table), vec![0, 5, 8]);
    assert!(table.all_complete());
}

#[test]
fn test_round_robin_example() {
    let mut table = ProcessTable::new(&[5, 3, 8]).unwrap();
    let scheduler = RoundRobinScheduler::new(3).unwrap();

    let elapsed = scheduler.run(&mut table).unwrap();

    // P0 3, P1 3, P2 3, P0 2, P2 3, P2 2
    assert_eq!(elapsed, 16);
    assert!(table.iter().all(|p| p.remaining_burst() == 0));
    assert_eq!(waits(&table), vec![6, 3, 8]);
    assert_eq!(reference_round_robin_waits(&[5, 3, 8], 3), (16, vec![6, 3, 8]));
}

#[test]
fn test_round_robin_single_process_wraps_around() {
    let mut table = ProcessTable::new(&[7]).unwrap();
    let scheduler = RoundRobinScheduler::new(3).unwrap();

    let elapsed = scheduler.run(&mut table).unwrap();

    assert_eq!(elapsed, 7);
    assert_eq!(table[0].remaining_burst(), 0);
    assert_eq!(table[0].accumulated_wait(), 0);
}

#[test]
fn test_empty_table_returns_zero() {
    let mut table = ProcessTable::new(&[]).unwrap();
    assert_eq!(FcfsScheduler.run(&mut table).unwrap(), 0);

    let mut table = ProcessTable::new(&[]).unwrap();
    assert_eq!(RoundRobinScheduler::new(2).unwrap().run(&mut table).unwrap(), 0);
}

#[test]
fn test_all_zero_bursts() {
    let mut table = ProcessTable::new(&[0, 0, 0]).unwrap();
    assert_eq!(RoundRobinScheduler::new(4).unwrap().run(&mut table).unwrap(), 0);
    assert_eq!(waits(&table), vec![0, 0, 0]);

    let mut table = ProcessTable::new(&[0, 0]).unwrap();
    assert_eq!(FcfsScheduler.run(&mut table).unwrap(), 0);
}

#[test]
fn test_elapsed_time_equals_total_work() {
    let workloads: Vec<Vec<Ticks>> = vec![vec![1], vec![4, 4, 4], vec![0, 9, 1, 0, 6], random_bursts(40, 12, 7).unwrap()];

    for bursts in workloads {
        let total: Ticks = bursts.iter().sum();

        let mut fcfs_table = ProcessTable::new(&bursts).unwrap();
        assert_eq!(FcfsScheduler.run(&mut fcfs_table).unwrap(), total, "FCFS elapsed for {:?}", bursts);
        assert!(fcfs_table.all_complete());

        for quantum in [1, 2, 5, 100] {
            let mut rr_table = ProcessTable::new(&bursts).unwrap();
            assert_eq!(RoundRobinScheduler::new(quantum).unwrap().run(&mut rr_table).unwrap(), total, "RR q={} for {:?}", quantum, bursts);
            assert!(rr_table.all_complete());
        }
    }
}

#[test]
fn test_round_robin_matches_reference_trace() {
    for seed in 0..5 {
        let bursts = random_bursts(12, 9, seed).unwrap();
        for quantum in [1, 3, 4, 10] {
            let mut table = ProcessTable::new(&bursts).unwrap();

            let elapsed = RoundRobinScheduler::new(quantum).unwrap().run(&mut table).unwrap();

            let (expected_elapsed, expected_waits) = reference_round_robin_waits(&bursts, quantum);
            assert_eq!(elapsed, expected_elapsed);
            assert_eq!(waits(&table), expected_waits, "bursts {:?} quantum {}", bursts, quantum);
        }
    }
}

#[test]
fn test_round_robin_with_large_quantum_behaves_like_fcfs() {
    let bursts = [6, 2, 9, 4];

    let mut rr_table = ProcessTable::new(&bursts).unwrap();
    RoundRobinScheduler::new(100).unwrap().run(&mut rr_table).unwrap();

    let mut fcfs_table = ProcessTable::new(&bursts).unwrap();
    FcfsScheduler.run(&mut fcfs_table).unwrap();

    assert_eq!(waits(&rr_table), waits(&fcfs_table));
}

#[test]
fn test_inspection_is_idempotent() {
    let mut table = ProcessTable::new(&[5, 3, 8]).unwrap();
    RoundRobinScheduler::new(2).unwrap().run(&mut table).unwrap();

    let first: Vec<(usize, Ticks, Ticks)> = table.iter().map(|p| (p.id(), p.remaining_burst(), p.accumulated_wait())).collect();
    let second: Vec<(usize, Ticks, Ticks)> = table.iter().map(|p| (p.id(), p.remaining_burst(), p.accumulated_wait())).collect();
    let snapshot = table.clone();

    assert_eq!(first, second);
    assert_eq!(table, snapshot);
}

#[test]
fn test_completed_process_wait_is_frozen_during_round_robin() {
    let bursts = [2, 10, 10];
    let mut table = ProcessTable::new(&bursts).unwrap();

    // Drive the table by hand, checking wait after each slice.
    let quantum: Ticks = 2;
    let mut current = 0;
    let mut frozen: Vec<Option<Ticks>> = vec![None; bursts.len()];
    loop {
        let remaining = table[current].remaining_burst();
        if remaining > 0 {
            table.advance(current, quantum.min(remaining)).unwrap();
        }

        for process in &table {
            let seen = frozen[process.id()];
            match seen {
                Some(wait) => assert_eq!(process.accumulated_wait(), wait),
                None if process.is_complete() => frozen[process.id()] = Some(process.accumulated_wait()),
                None => {}
            }
        }

        match RoundRobinScheduler::next_candidate(&table, current) {
            Some(next) => current = next,
            None => break,
        }
    }

    assert_eq!(frozen, vec![Some(0), Some(10), Some(12)]);
}

#[test]
fn test_total_work_overflow_is_rejected_before_scheduling() {
    let bursts = [Ticks::MAX, 1];

    assert!(matches!(ProcessTable::new(&bursts), Err(Error::ContractViolation(_))));
}

#[test]
fn test_schedulers_handle_total_work_at_tick_limit() {
    let bursts = [Ticks::MAX - 1, 1];

    let mut fcfs_table = ProcessTable::new(&bursts).unwrap();
    assert_eq!(FcfsScheduler.run(&mut fcfs_table).unwrap(), Ticks::MAX);
    assert_eq!(waits(&fcfs_table), vec![0, Ticks::MAX - 1]);

    let mut rr_table = ProcessTable::new(&bursts).unwrap();
    assert_eq!(RoundRobinScheduler::new(Ticks::MAX).unwrap().run(&mut rr_table).unwrap(), Ticks::MAX);
    assert!(rr_table.all_complete());
}
