//! Simulation result model.
//!
//! A simulation result is the ordered CPU timeline (for Gantt rendering)
//! plus one row of derived timing metrics per input process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

/// One span of CPU ownership.
///
/// Non-preemptive policies produce exactly one interval per process;
/// preemptive policies produce one or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Owning process ID.
    pub process_id: String,
    /// First tick of ownership.
    pub begin_time: i64,
    /// Tick at which ownership ends (exclusive).
    pub end_time: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, begin_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            begin_time,
            end_time,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.begin_time
    }

    /// Whether two intervals share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.begin_time < other.end_time && other.begin_time < self.end_time
    }
}

/// Derived timing metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process ID.
    pub process_id: String,
    /// Arrival time (copied from the input).
    pub arrival_time: i64,
    /// Burst time (copied from the input).
    pub burst_time: i64,
    /// Priority (copied from the input).
    pub priority: Option<i32>,
    /// Time of first CPU ownership.
    pub start_time: i64,
    /// Time the last unit of service finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// CPU timeline, sorted by `begin_time`.
    pub intervals: Vec<ExecutionInterval>,
    /// Per-process metrics, in original input order.
    pub results: Vec<ProcessResult>,
    /// Mean turnaround time over all processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time over all processes.
    pub average_waiting_time: f64,
}

impl SimulationResult {
    /// Finds the metrics row for a process.
    pub fn result(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Returns every interval owned by a process, in timeline order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total CPU time a process received.
    pub fn service_time(&self, process_id: &str) -> i64 {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.duration())
            .sum()
    }

    /// Latest completion time across all processes.
    pub fn makespan(&self) -> i64 {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Process IDs in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for interval in &self.intervals {
            if !order.contains(&interval.process_id.as_str()) {
                order.push(&interval.process_id);
            }
        }
        order
    }

    /// Number of processes simulated.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }
}
