//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! Discrete-event loop over a clock starting at 0:
//! 1. Among unfinished processes with `arrival_time <= clock`, pick the
//!    smallest burst time; ties go to the lowest input index.
//! 2. If none is ready, jump the clock to the next arrival.
//! 3. Run the pick to completion and advance the clock to its end.
//!
//! Jumping over idle time yields the same schedule as ticking through it
//! one unit at a time.
//!
//! # Complexity
//! O(n²).
//!
//! # Reference
//! Smith (1956), optimal mean flow time on a single machine.

use log::debug;

use super::{next_arrival, SchedulingPolicy};
use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;

/// Shortest Job First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>) {
        let n = processes.len();
        let mut done = vec![false; n];
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < n {
            let pick = (0..n)
                .filter(|&i| !done[i] && processes[i].arrival_time <= clock)
                .min_by_key(|&i| (processes[i].burst_time, i));

            let Some(i) = pick else {
                match next_arrival(processes, &done) {
                    Some(t) => {
                        debug!("SJF: idle [{clock}, {t})");
                        clock = t;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &processes[i];
            let completion = clock + p.burst_time;
            debug!("SJF: dispatch {} for [{clock}, {completion})", p.id);
            timeline.dispatch(i, clock, completion);

            clock = completion;
            done[i] = true;
            completed += 1;
        }
    }
}
