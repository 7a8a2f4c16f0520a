//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of interval durations |
//! | Idle Time | Makespan - busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes / makespan |
//! | Context Switches | Adjacent intervals owned by different processes |
//! | Avg / Max Turnaround | Over completion - arrival |
//! | Avg / Max Waiting | Over turnaround - burst |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Simulation performance indicators.
///
/// All time values are in simulation ticks measured from t=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Ticks during which the CPU ran some process.
    pub busy_time: i64,
    /// Ticks in `[0, makespan)` during which the CPU sat idle.
    pub idle_time: i64,
    /// Fraction of `[0, makespan)` spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of times the CPU passed from one process to another.
    pub context_switches: usize,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Largest turnaround time of any process.
    pub max_turnaround_time: i64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let busy_time: i64 = result.intervals.iter().map(|i| i.duration()).sum();

        let context_switches = result
            .intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.process_count() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: (makespan - busy_time).max(0),
            cpu_utilization,
            throughput,
            context_switches,
            average_turnaround_time: result.average_turnaround_time,
            average_waiting_time: result.average_waiting_time,
            max_turnaround_time: result
                .results
                .iter()
                .map(|r| r.turnaround_time)
                .max()
                .unwrap_or(0),
            max_waiting_time: result
                .results
                .iter()
                .map(|r| r.waiting_time)
                .max()
                .unwrap_or(0),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_average_waiting: f64, min_utilization: f64) -> bool {
        self.average_waiting_time <= max_average_waiting && self.cpu_utilization >= min_utilization
    }
}
