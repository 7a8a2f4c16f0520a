//! Round Robin.
//!
//! # Algorithm
//!
//! A FIFO ready queue plus an admission cursor over the arrival-sorted
//! processes:
//! 1. Admit every process with `arrival_time <= clock` to the queue tail,
//!    in arrival order.
//! 2. If the queue is empty, jump to the next arrival, or stop when none
//!    remain.
//! 3. Pop the head and run it for `min(quantum, remaining)` units.
//! 4. If it still has work, first admit everything that arrived during
//!    the slice, **then** requeue it at the tail.
//!
//! Step 4's ordering puts newcomers ahead of the process that was just
//! preempted.
//!
//! # Complexity
//! O(n log n + Σburst / quantum).

use std::collections::VecDeque;

use log::debug;

use super::{arrival_order, SchedulingPolicy, DEFAULT_QUANTUM};
use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;
use crate::validation::{validate_quantum, ValidationError};

/// Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given time slice.
    ///
    /// The quantum is not checked here: [`simulate`] rejects values below 1,
    /// while a direct [`SchedulingPolicy::schedule`] call runs them as 1.
    /// Use [`RoundRobin::checked`] to reject them up front.
    ///
    /// [`simulate`]: crate::simulator::simulate
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Creates a Round Robin policy, rejecting a quantum below 1.
    ///
    /// # Errors
    /// A single [`ValidationErrorKind::NonPositiveQuantum`] error.
    ///
    /// [`ValidationErrorKind::NonPositiveQuantum`]: crate::validation::ValidationErrorKind::NonPositiveQuantum
    pub fn checked(quantum: i64) -> Result<Self, Vec<ValidationError>> {
        validate_quantum(quantum)?;
        Ok(Self::new(quantum))
    }

    /// The configured time slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

/// Ready queue fed from an arrival-ordered admission cursor.
struct ReadyQueue {
    order: Vec<usize>,
    next: usize,
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(processes: &[ProcessSpec]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
            queue: VecDeque::with_capacity(processes.len()),
            queued: vec![false; processes.len()],
        }
    }

    /// Moves every process that has arrived by `clock` to the tail.
    fn admit(&mut self, processes: &[ProcessSpec], clock: i64) {
        while let Some(&i) = self.order.get(self.next) {
            if processes[i].arrival_time > clock {
                break;
            }
            self.push(i);
            self.next += 1;
        }
    }

    fn push(&mut self, i: usize) {
        if !self.queued[i] {
            self.queued[i] = true;
            self.queue.push_back(i);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let i = self.queue.pop_front()?;
        self.queued[i] = false;
        Some(i)
    }

    /// Arrival time of the next process not yet admitted.
    fn next_arrival(&self, processes: &[ProcessSpec]) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&i| processes[i].arrival_time)
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>) {
        // Unchecked quanta below 1 run as 1.
        let quantum = self.quantum.max(1);
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut ready = ReadyQueue::new(processes);
        let mut clock: i64 = 0;

        loop {
            ready.admit(processes, clock);

            let Some(i) = ready.pop() else {
                match ready.next_arrival(processes) {
                    Some(t) => {
                        debug!("RR: idle [{clock}, {t})");
                        clock = t;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = quantum.min(remaining[i]);
            debug!(
                "RR: dispatch {} for [{clock}, {})",
                processes[i].id,
                clock + slice
            );
            timeline.dispatch(i, clock, clock + slice);
            clock += slice;
            remaining[i] -= slice;

            if remaining[i] == 0 {
                debug!("RR: {} completes at {clock}", processes[i].id);
            } else {
                ready.admit(processes, clock);
                ready.push(i);
            }
        }
    }
}
