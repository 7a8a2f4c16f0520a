//! CPU-scheduling policies.
//!
//! Five interchangeable uniprocessor policies, each a pure function from
//! process specifications (plus parameters) to a timeline:
//!
//! | Policy | Preemptive | Primary key | Tie-break |
//! |--------|------------|-------------|-----------|
//! | FCFS | no | arrival time | input index |
//! | SJF | no | burst time (among ready) | input index |
//! | SRTF | yes | remaining time (among ready) | input index |
//! | Round Robin | yes | FIFO queue, fixed quantum | arrival order |
//! | Priority | no | priority, descending (among ready) | input index |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::policy::{PolicyKind, PolicyParams};
//!
//! let kind: PolicyKind = "rr".parse().unwrap();
//! assert_eq!(kind, PolicyKind::RoundRobin);
//! assert!(kind.is_preemptive());
//!
//! let params = PolicyParams::default().with_quantum(4);
//! assert_eq!(kind.policy(&params).name(), "RR");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;
use crate::simulator::TimelineBuilder;

/// Quantum offered when the caller does not choose one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A scheduling policy.
///
/// Implementations record every span of CPU ownership into the supplied
/// [`TimelineBuilder`], addressing processes by their index in
/// `processes`. Inputs are already validated: arrivals are non-negative,
/// bursts are positive, IDs are unique, `max(arrival) + Σburst` fits in
/// `i64`, and policy-specific requirements (priorities, quantum) hold.
/// Callers that bypass [`simulate`](crate::simulator::simulate) should run
/// [`validate_processes`](crate::validation::validate_processes) first.
///
/// Policies must not mutate the caller's slice; any reordering happens on
/// a private index vector.
pub trait SchedulingPolicy: Send + Sync + fmt::Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the policy to completion.
    fn schedule(&self, processes: &[ProcessSpec], timeline: &mut TimelineBuilder<'_>);

    /// Whether a running process can be interrupted before it finishes.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Whether back-to-back dispatches of one process form one interval.
    fn merges_contiguous(&self) -> bool {
        false
    }
}

/// The selectable policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First Come First Serve.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Priority (non-preemptive, higher value = more urgent).
    Priority,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
        PolicyKind::Priority,
    ];

    /// Short name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
        }
    }

    /// Long, human-readable name.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Srtf => "Shortest Remaining Time First",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority (Non-Preemptive)",
        }
    }

    /// One-line description of how the policy picks the next process.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "Processes are executed strictly in the order they arrive.",
            Self::Sjf => "Executes the process with the shortest burst time first.",
            Self::Srtf => "Preemptively schedules processes based on remaining time.",
            Self::RoundRobin => {
                "Processes are executed in a circular manner with fixed time quantum."
            }
            Self::Priority => "Executes processes based on priority values.",
        }
    }

    /// Main strength of the policy.
    pub fn advantages(self) -> &'static str {
        match self {
            Self::Fcfs => "Simple and fair for basic scheduling needs.",
            Self::Sjf => "Optimal average waiting time for non-preemptive scheduling.",
            Self::Srtf => "Optimal average waiting time for preemptive scheduling.",
            Self::RoundRobin => "Fair allocation of CPU time to all processes.",
            Self::Priority => "Good for systems with clear process importance levels.",
        }
    }

    /// Main weakness of the policy.
    pub fn disadvantages(self) -> &'static str {
        match self {
            Self::Fcfs => "Can lead to longer average waiting times.",
            Self::Sjf => "May lead to starvation of longer processes.",
            Self::Srtf => "High overhead due to frequent context switching.",
            Self::RoundRobin => "Performance depends heavily on quantum size.",
            Self::Priority => "Can lead to priority inversion and starvation.",
        }
    }

    /// Whether the policy preempts running processes.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin)
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Whether the policy reads the quantum parameter.
    pub fn uses_quantum(self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Instantiates the policy.
    pub fn policy(self, params: &PolicyParams) -> Box<dyn SchedulingPolicy> {
        match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Srtf => Box::new(Srtf),
            Self::RoundRobin => Box::new(RoundRobin::new(params.quantum)),
            Self::Priority => Box::new(Priority),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling policy '{}'", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    /// Accepts short names, long names, and `"<short> (<long>)"` labels,
    /// ignoring case, spaces, dashes, and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.split('(').next().unwrap_or(s);
        let key: String = head
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "fcfs" | "fifo" | "firstcomefirstserve" | "firstcomefirstserved" => Ok(Self::Fcfs),
            "sjf" | "spt" | "shortestjobfirst" => Ok(Self::Sjf),
            "srtf" | "srt" | "shortestremainingtimefirst" => Ok(Self::Srtf),
            "rr" | "roundrobin" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Round Robin time slice. Ignored by other policies.
    pub quantum: i64,
}

impl PolicyParams {
    /// Creates parameters with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// Indices of `processes` sorted by arrival time, ties in input order.
pub(crate) fn arrival_order(processes: &[ProcessSpec]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}

/// Earliest arrival among processes not yet marked done.
pub(crate) fn next_arrival(processes: &[ProcessSpec], done: &[bool]) -> Option<i64> {
    processes
        .iter()
        .zip(done)
        .filter(|&(_, &d)| !d)
        .map(|(p, _)| p.arrival_time)
        .min()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{ProcessSpec, SimulationResult};
    use crate::simulator::TimelineBuilder;

    use super::SchedulingPolicy;

    /// Runs a policy directly, bypassing validation.
    pub fn run(policy: &dyn SchedulingPolicy, processes: &[ProcessSpec]) -> SimulationResult {
        let mut tb =
            TimelineBuilder::new(processes).with_merge_contiguous(policy.merges_contiguous());
        policy.schedule(processes, &mut tb);
        tb.build().unwrap()
    }

    /// `(start, completion)` pairs in input order.
    pub fn times(result: &SimulationResult) -> Vec<(i64, i64)> {
        result
            .results
            .iter()
            .map(|r| (r.start_time, r.completion_time))
            .collect()
    }

    /// `(id, begin, end)` triples of the timeline.
    pub fn gantt(result: &SimulationResult) -> Vec<(&str, i64, i64)> {
        result
            .intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.begin_time, i.end_time))
            .collect()
    }

    /// The three-process workload used throughout the policy tests.
    pub fn classic() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 4),
            ProcessSpec::new("P2", 1, 3),
            ProcessSpec::new("P3", 2, 1),
        ]
    }
}
