//! Priority scheduling (non-preemptive).
//!
//! Higher priority values are more urgent.
//!
//! # Algorithm
//!
//! 1. Rank processes once by descending priority (stable: ties keep input
//!    order).
//! 2. Repeatedly scan the ranking from the top and start the first
//!    unscheduled process with `arrival_time <= cursor`; run it to
//!    completion and move the cursor to its end.
//! 3. If a scan finds nothing ready, move the cursor to the earliest
//!    arrival among unscheduled processes and scan again.
//!
//! The ranking never changes, only the unscheduled filter does, so the
//! first match is always the most urgent ready process.
//!
//! # Complexity
//! O(n²).

use std::cmp::Reverse;

use log::debug;

use super::{next_arrival, SchedulingPolicy};
use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;

/// Non-preemptive priority scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl Priority {
    /// Indices of `processes` from most to least urgent.
    ///
    /// Processes without a priority rank last.
    pub fn ranking(processes: &[ProcessSpec]) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..processes.len()).collect();
        ranked.sort_by_key(|&i| Reverse(processes[i].priority.unwrap_or(i32::MIN)));
        ranked
    }
}

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>) {
        let n = processes.len();
        let ranked = Self::ranking(processes);
        let mut scheduled = vec![false; n];
        let mut cursor: i64 = 0;
        let mut count = 0;

        while count < n {
            let pick = ranked
                .iter()
                .copied()
                .find(|&i| !scheduled[i] && processes[i].arrival_time <= cursor);

            let Some(i) = pick else {
                match next_arrival(processes, &scheduled) {
                    Some(t) => {
                        debug!("Priority: nothing ready at {cursor}, advancing to {t}");
                        cursor = t;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &processes[i];
            let completion = cursor + p.burst_time;
            debug!(
                "Priority: dispatch {} (priority {:?}) for [{cursor}, {completion})",
                p.id, p.priority
            );
            timeline.dispatch(i, cursor, completion);

            cursor = completion;
            scheduled[i] = true;
            count += 1;
        }
    }
}
