//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! The decision is re-taken every time unit:
//! 1. Among unfinished processes with `arrival_time <= clock`, pick the
//!    smallest remaining burst; ties go to the lowest input index.
//! 2. If none is ready, jump the clock to the next arrival.
//! 3. Run the pick for one unit.
//!
//! A process's `start_time` is its first dispatch; resumptions after a
//! preemption do not move it. Consecutive units of the same process are
//! merged into one Gantt interval by the timeline builder.
//!
//! # Complexity
//! O(n · Σburst).
//!
//! # Reference
//! Schrage (1968), SRPT minimizes mean flow time with preemption.

use log::{debug, trace};

use super::{next_arrival, SchedulingPolicy};
use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;

/// Shortest Remaining Time First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn merges_contiguous(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>) {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut running: Option<usize> = None;
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < n {
            let pick = (0..n)
                .filter(|&i| remaining[i] > 0 && processes[i].arrival_time <= clock)
                .min_by_key(|&i| (remaining[i], i));

            let Some(i) = pick else {
                let done: Vec<bool> = remaining.iter().map(|&r| r == 0).collect();
                match next_arrival(processes, &done) {
                    Some(t) => {
                        debug!("SRTF: idle [{clock}, {t})");
                        running = None;
                        clock = t;
                        continue;
                    }
                    None => break,
                }
            };

            if running != Some(i) {
                if let Some(prev) = running.filter(|&prev| remaining[prev] > 0) {
                    debug!(
                        "SRTF: {} preempts {} at {clock}",
                        processes[i].id, processes[prev].id
                    );
                }
                if timeline.has_started(i) {
                    debug!("SRTF: resume {} at {clock}", processes[i].id);
                } else {
                    debug!("SRTF: first dispatch of {} at {clock}", processes[i].id);
                }
            }

            trace!(
                "SRTF: tick {clock} -> {} (remaining {})",
                processes[i].id,
                remaining[i]
            );
            timeline.dispatch(i, clock, clock + 1);
            remaining[i] -= 1;
            clock += 1;

            if remaining[i] == 0 {
                completed += 1;
            }
            running = Some(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::{classic, gantt, run, times};

    #[test]
    fn test_srtf_classic() {
        let r = run(&Srtf, &classic());
        // t=1: P1 and P2 tie at 3 remaining, P1 keeps the CPU (lower index).
        // t=2: P3 arrives with 1 remaining and preempts P1.
        assert_eq!(
            gantt(&r),
            vec![("P1", 0, 2), ("P3", 2, 3), ("P1", 3, 5), ("P2", 5, 8)]
        );
        assert_eq!(times(&r), vec![(0, 5), (5, 8), (2, 3)]);

        let waits: Vec<i64> = r.results.iter().map(|x| x.waiting_time).collect();
        assert_eq!(waits, vec![1, 4, 0]);
        assert!((r.average_turnaround_time - 13.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_start_is_first_dispatch() {
        let processes = vec![ProcessSpec::new("long", 0, 10), ProcessSpec::new("short", 1, 1)];
        let r = run(&Srtf, &processes);
        assert_eq!(
            gantt(&r),
            vec![("long", 0, 1), ("short", 1, 2), ("long", 2, 11)]
        );
        let long = r.result("long").unwrap();
        assert_eq!(long.start_time, 0); // not the resume at t=2
        assert_eq!(long.completion_time, 11);
        assert_eq!(long.waiting_time, 1);
    }

    #[test]
    fn test_srtf_merges_contiguous_units() {
        let processes = vec![ProcessSpec::new("A", 0, 5)];
        let r = run(&Srtf, &processes);
        assert_eq!(gantt(&r), vec![("A", 0, 5)]);
    }

    #[test]
    fn test_srtf_idle_gap() {
        let processes = vec![ProcessSpec::new("A", 0, 1), ProcessSpec::new("B", 4, 2)];
        let r = run(&Srtf, &processes);
        assert_eq!(gantt(&r), vec![("A", 0, 1), ("B", 4, 6)]);
    }

    #[test]
    fn test_srtf_tie_keeps_lower_index() {
        // B arrives with the same remaining time as A; A is not preempted.
        let processes = vec![ProcessSpec::new("A", 0, 3), ProcessSpec::new("B", 1, 2)];
        let r = run(&Srtf, &processes);
        assert_eq!(gantt(&r), vec![("A", 0, 3), ("B", 3, 5)]);
    }

    #[test]
    fn test_srtf_lower_index_wins_later_tie() {
        // At t=1 B (index 0) and A (index 1) both have 2 remaining.
        let processes = vec![ProcessSpec::new("B", 1, 2), ProcessSpec::new("A", 0, 3)];
        let r = run(&Srtf, &processes);
        assert_eq!(gantt(&r), vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 5)]);
    }
}
