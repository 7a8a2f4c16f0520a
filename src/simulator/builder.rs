//! Timeline builder.
//!
//! Collects raw dispatch decisions from a policy and turns them into a
//! [`SimulationResult`]: a sorted Gantt timeline plus per-process metrics
//! and averages.
//!
//! # Algorithm
//!
//! 1. Each dispatch `(process, begin, end)` is appended to the timeline,
//!    optionally merged into the previous interval when the same process
//!    keeps the CPU without a gap.
//! 2. The first dispatch of a process fixes its `start_time`; the latest
//!    `end` fixes its `completion_time`.
//! 3. Turnaround and waiting times follow from arrival and burst; the
//!    averages are arithmetic means over all processes.

use log::warn;

use crate::error::SchedulingError;
use crate::models::{ExecutionInterval, ProcessResult, ProcessSpec, SimulationResult};

#[derive(Debug, Clone, Copy)]
struct Slot {
    index: usize,
    begin: i64,
    end: i64,
}

/// Accumulates dispatch decisions for one run.
///
/// Processes are addressed by their index in the slice the builder was
/// created with.
#[derive(Debug, Clone)]
pub struct TimelineBuilder<'a> {
    processes: &'a [ProcessSpec],
    slots: Vec<Slot>,
    first_dispatch: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    merge_contiguous: bool,
}

impl<'a> TimelineBuilder<'a> {
    /// Creates an empty builder for the given processes.
    pub fn new(processes: &'a [ProcessSpec]) -> Self {
        Self {
            processes,
            slots: Vec::new(),
            first_dispatch: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            merge_contiguous: false,
        }
    }

    /// Merges back-to-back dispatches of the same process into one interval.
    pub fn with_merge_contiguous(mut self, merge: bool) -> Self {
        self.merge_contiguous = merge;
        self
    }

    /// Records that `processes[index]` owned the CPU during `[begin, end)`.
    ///
    /// Empty spans and out-of-range indices are ignored.
    pub fn dispatch(&mut self, index: usize, begin: i64, end: i64) {
        if end <= begin {
            return;
        }
        if index >= self.processes.len() {
            warn!(
                "dispatch of unknown process index {index} ({} processes)",
                self.processes.len()
            );
            return;
        }

        if self.first_dispatch[index].is_none() {
            self.first_dispatch[index] = Some(begin);
        }
        let done = self.completion[index].get_or_insert(end);
        *done = (*done).max(end);

        if self.merge_contiguous {
            if let Some(last) = self.slots.last_mut() {
                if last.index == index && last.end == begin {
                    last.end = end;
                    return;
                }
            }
        }
        self.slots.push(Slot { index, begin, end });
    }

    /// Whether `processes[index]` has been dispatched at least once.
    ///
    /// Always `false` for an out-of-range index.
    pub fn has_started(&self, index: usize) -> bool {
        matches!(self.first_dispatch.get(index), Some(Some(_)))
    }

    /// Number of intervals recorded so far.
    pub fn interval_count(&self) -> usize {
        self.slots.len()
    }

    /// Finalizes the run.
    ///
    /// A process that was never dispatched falls back to
    /// `start_time = arrival_time` and `completion_time = arrival + burst`.
    ///
    /// # Errors
    /// [`SchedulingError::EmptyInput`] if the builder holds no processes.
    pub fn build(mut self) -> Result<SimulationResult, SchedulingError> {
        if self.processes.is_empty() {
            return Err(SchedulingError::EmptyInput);
        }

        self.slots.sort_by_key(|s| s.begin);
        let intervals: Vec<ExecutionInterval> = self
            .slots
            .iter()
            .map(|s| ExecutionInterval::new(&self.processes[s.index].id, s.begin, s.end))
            .collect();

        let mut results = Vec::with_capacity(self.processes.len());
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;

        for (i, p) in self.processes.iter().enumerate() {
            let start_time = self.first_dispatch[i].unwrap_or_else(|| {
                warn!("process '{}' was never dispatched", p.id);
                p.arrival_time
            });
            let completion_time = self.completion[i].unwrap_or_else(|| p.earliest_completion());
            let turnaround_time = completion_time.saturating_sub(p.arrival_time);
            let waiting_time = turnaround_time.saturating_sub(p.burst_time);

            total_turnaround = total_turnaround.saturating_add(turnaround_time);
            total_waiting = total_waiting.saturating_add(waiting_time);

            results.push(ProcessResult {
                process_id: p.id.clone(),
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                priority: p.priority,
                start_time,
                completion_time,
                turnaround_time,
                waiting_time,
            });
        }

        let n = self.processes.len() as f64;
        Ok(SimulationResult {
            intervals,
            results,
            average_turnaround_time: total_turnaround as f64 / n,
            average_waiting_time: total_waiting as f64 / n,
        })
    }
}
