//! First Come First Serve.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable: ties keep input order).
//! 2. Walk that order, starting each process at
//!    `max(arrival_time, last_completion_time)`.
//! 3. Run it to completion; one interval per process.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::debug;

use super::{arrival_order, SchedulingPolicy};
use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;

/// First Come First Serve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>) {
        let mut last_completion: i64 = 0;

        for i in arrival_order(processes) {
            let p = &processes[i];
            let start = p.arrival_time.max(last_completion);
            let completion = start + p.burst_time;

            debug!("FCFS: dispatch {} for [{start}, {completion})", p.id);
            timeline.dispatch(i, start, completion);
            last_completion = completion;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::{classic, gantt, run, times};

    #[test]
    fn test_fcfs_classic() {
        let r = run(&Fcfs, &classic());
        assert_eq!(times(&r), vec![(0, 4), (4, 7), (7, 8)]);

        let waits: Vec<i64> = r.results.iter().map(|x| x.waiting_time).collect();
        let tats: Vec<i64> = r.results.iter().map(|x| x.turnaround_time).collect();
        assert_eq!(waits, vec![0, 3, 5]);
        assert_eq!(tats, vec![4, 6, 6]);
        assert!((r.average_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((r.average_turnaround_time - 16.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![ProcessSpec::new("A", 0, 2), ProcessSpec::new("B", 5, 1)];
        let r = run(&Fcfs, &processes);
        assert_eq!(gantt(&r), vec![("A", 0, 2), ("B", 5, 6)]);
        assert_eq!(r.result("B").unwrap().waiting_time, 0);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        // Input order differs from arrival order.
        let processes = vec![
            ProcessSpec::new("late", 3, 1),
            ProcessSpec::new("early", 0, 2),
        ];
        let r = run(&Fcfs, &processes);
        assert_eq!(gantt(&r), vec![("early", 0, 2), ("late", 3, 4)]);
        // Rows stay in input order.
        assert_eq!(r.results[0].process_id, "late");
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            ProcessSpec::new("long", 0, 5),
            ProcessSpec::new("short", 0, 1),
        ];
        let r = run(&Fcfs, &processes);
        assert_eq!(r.dispatch_order(), vec!["long", "short"]);
    }
}
