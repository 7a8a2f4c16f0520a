//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Reject an empty process list.
//! 2. Validate the processes, plus priorities (Priority) or the quantum
//!    (Round Robin); report every problem at once.
//! 3. Run the selected policy into a fresh [`TimelineBuilder`].
//! 4. Build the timeline and metrics.
//!
//! Each call borrows its input immutably and returns a freshly built
//! result, so concurrent runs never share state.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::TimelineBuilder;
use crate::error::SchedulingError;
use crate::models::{ProcessSpec, SimulationResult};
use crate::policy::{PolicyKind, PolicyParams};
use crate::validation::{validate_priorities, validate_processes, validate_quantum};

/// Runs one policy over a process list.
///
/// # Errors
/// - [`SchedulingError::EmptyInput`] if `processes` is empty.
/// - [`SchedulingError::InvalidInput`] with every validation problem found.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::policy::{PolicyKind, PolicyParams};
/// use u_cpusched::simulator::simulate;
///
/// let processes = vec![
///     ProcessSpec::new("P1", 0, 4),
///     ProcessSpec::new("P2", 1, 3),
///     ProcessSpec::new("P3", 2, 1),
/// ];
/// let result = simulate(PolicyKind::Fcfs, &processes, &PolicyParams::default()).unwrap();
///
/// assert_eq!(result.result("P3").unwrap().start_time, 7);
/// assert_eq!(result.intervals.len(), 3);
/// ```
pub fn simulate(
    policy: PolicyKind,
    processes: &[ProcessSpec],
    params: &PolicyParams,
) -> Result<SimulationResult, SchedulingError> {
    if processes.is_empty() {
        warn!("{policy}: rejected empty process list");
        return Err(SchedulingError::EmptyInput);
    }

    let mut errors = Vec::new();
    errors.extend(validate_processes(processes).err().unwrap_or_default());
    if policy.requires_priority() {
        errors.extend(validate_priorities(processes).err().unwrap_or_default());
    }
    if policy.uses_quantum() {
        errors.extend(validate_quantum(params.quantum).err().unwrap_or_default());
    }
    if !errors.is_empty() {
        warn!("{policy}: rejected input with {} problem(s)", errors.len());
        return Err(SchedulingError::InvalidInput(errors));
    }

    let scheduler = policy.policy(params);
    debug!(
        "{}: simulating {} process(es)",
        scheduler.name(),
        processes.len()
    );

    let mut timeline =
        TimelineBuilder::new(processes).with_merge_contiguous(scheduler.merges_contiguous());
    scheduler.schedule(processes, &mut timeline);
    let result = timeline.build()?;

    debug!(
        "{}: done, makespan {}, avg turnaround {:.2}, avg waiting {:.2}",
        scheduler.name(),
        result.makespan(),
        result.average_turnaround_time,
        result.average_waiting_time
    );
    Ok(result)
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Selected policy.
    pub policy: PolicyKind,
    /// Processes to schedule, in entry order.
    pub processes: Vec<ProcessSpec>,
    /// Policy parameters.
    #[serde(default)]
    pub params: PolicyParams,
}

impl SimulationRequest {
    /// Creates a request with default parameters.
    pub fn new(policy: PolicyKind, processes: Vec<ProcessSpec>) -> Self {
        Self {
            policy,
            processes,
            params: PolicyParams::default(),
        }
    }

    /// Appends a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Sets the parameters.
    pub fn with_params(mut self, params: PolicyParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.params.quantum = quantum;
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult, SchedulingError> {
        simulate(self.policy, &self.processes, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn classic() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 4),
            ProcessSpec::new("P2", 1, 3),
            ProcessSpec::new("P3", 2, 1),
        ]
    }

    fn kinds(err: &SchedulingError) -> Vec<ValidationErrorKind> {
        err.validation_errors().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_empty_input_for_every_policy() {
        for kind in PolicyKind::ALL {
            let err = simulate(kind, &[], &PolicyParams::default()).unwrap_err();
            assert_eq!(err, SchedulingError::EmptyInput, "{kind}");
        }
    }

    #[test]
    fn test_empty_input_wins_over_bad_quantum() {
        let err = simulate(PolicyKind::RoundRobin, &[], &PolicyParams::new(0)).unwrap_err();
        assert_eq!(err, SchedulingError::EmptyInput);
    }

    #[test]
    fn test_zero_quantum_is_invalid() {
        let err = simulate(PolicyKind::RoundRobin, &classic(), &PolicyParams::new(0)).unwrap_err();
        assert_eq!(kinds(&err), vec![ValidationErrorKind::NonPositiveQuantum]);
    }

    #[test]
    fn test_quantum_ignored_by_other_policies() {
        assert!(simulate(PolicyKind::Fcfs, &classic(), &PolicyParams::new(0)).is_ok());
    }

    #[test]
    fn test_missing_priority() {
        let processes = vec![
            ProcessSpec::new("P1", 0, 4).with_priority(2),
            ProcessSpec::new("P2", 1, 3),
        ];
        let err = simulate(PolicyKind::Priority, &processes, &PolicyParams::default()).unwrap_err();
        assert_eq!(kinds(&err), vec![ValidationErrorKind::MissingPriority]);

        // Other policies do not need priorities.
        assert!(simulate(PolicyKind::Sjf, &processes, &PolicyParams::default()).is_ok());
    }

    #[test]
    fn test_all_problems_reported() {
        let processes = vec![ProcessSpec::new("P1", -1, 0), ProcessSpec::new("P1", 0, 1)];
        let err =
            simulate(PolicyKind::RoundRobin, &processes, &PolicyParams::new(-3)).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::DuplicateId,
                ValidationErrorKind::NonPositiveQuantum,
            ]
        );
    }

    #[test]
    fn test_oversized_times_rejected_for_every_policy() {
        let cases = [
            vec![ProcessSpec::new("A", i64::MAX - 1, 5).with_priority(1)],
            vec![ProcessSpec::new("A", i64::MAX, 1).with_priority(1)],
            vec![
                ProcessSpec::new("A", 0, i64::MAX - 1).with_priority(1),
                ProcessSpec::new("B", 0, 2).with_priority(1),
            ],
        ];
        for processes in &cases {
            for kind in PolicyKind::ALL {
                let err = simulate(kind, processes, &PolicyParams::default()).unwrap_err();
                assert_eq!(kinds(&err), vec![ValidationErrorKind::TimeOverflow], "{kind}");
            }
        }
    }

    #[test]
    fn test_input_is_not_reordered() {
        let processes = vec![ProcessSpec::new("B", 5, 1), ProcessSpec::new("A", 0, 2)];
        let snapshot = processes.clone();
        for kind in [PolicyKind::Fcfs, PolicyKind::RoundRobin] {
            simulate(kind, &processes, &PolicyParams::default()).unwrap();
        }
        assert_eq!(processes, snapshot);
    }

    #[test]
    fn test_srtf_merges_rr_does_not() {
        let processes = vec![ProcessSpec::new("A", 0, 4)];
        let srtf = simulate(PolicyKind::Srtf, &processes, &PolicyParams::default()).unwrap();
        let rr = simulate(PolicyKind::RoundRobin, &processes, &PolicyParams::new(2)).unwrap();
        assert_eq!(srtf.intervals.len(), 1);
        assert_eq!(rr.intervals.len(), 2);
    }

    #[test]
    fn test_request_builder() {
        let request = SimulationRequest::new(PolicyKind::RoundRobin, Vec::new())
            .with_process(ProcessSpec::numbered(1, 0, 4))
            .with_process(ProcessSpec::numbered(2, 1, 3))
            .with_process(ProcessSpec::numbered(3, 2, 1))
            .with_quantum(2);
        let r = request.run().unwrap();
        assert_eq!(r.result("P1").unwrap().completion_time, 7);
        assert_eq!(r.result("P2").unwrap().completion_time, 8);
        assert_eq!(r.result("P3").unwrap().completion_time, 5);
    }

    #[test]
    fn test_request_params() {
        let request = SimulationRequest::new(PolicyKind::Fcfs, classic())
            .with_params(PolicyParams::new(7));
        assert_eq!(request.params.quantum, 7);
        assert!(request.run().is_ok());
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "policy": "Priority",
            "processes": [
                {"id": "P1", "arrival_time": 0, "burst_time": 4, "priority": 1},
                {"id": "P2", "arrival_time": 1, "burst_time": 3, "priority": 3}
            ]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.params, PolicyParams::default());

        let r = request.run().unwrap();
        assert_eq!(r.dispatch_order(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_result_to_json() {
        let r = simulate(PolicyKind::Fcfs, &classic(), &PolicyParams::default()).unwrap();
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["intervals"][0]["process_id"], "P1");
        assert_eq!(value["results"][2]["waiting_time"], 5);
    }
}
