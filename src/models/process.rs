//! Process (schedulable unit) model.
//!
//! A process is the input to every policy: a stable label, the instant it
//! becomes eligible for the CPU, and the total service it needs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// An immutable process specification.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// Validation rejects negative arrivals and non-positive bursts before
/// any policy runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible for scheduling.
    pub arrival_time: i64,
    /// Total CPU service required.
    pub burst_time: i64,
    /// Urgency for the Priority policy (higher = more urgent).
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Creates a process labelled `P{number}`.
    ///
    /// Interactive entry forms number processes from 1 in entry order.
    pub fn numbered(number: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self::new(format!("P{number}"), arrival_time, burst_time)
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Earliest instant the process could possibly complete.
    ///
    /// Saturates at `i64::MAX` for unvalidated specs.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time.saturating_add(self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessSpec::new("P1", 3, 5).with_priority(7);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, Some(7));
        assert_eq!(p.earliest_completion(), 8);
    }

    #[test]
    fn test_earliest_completion_saturates() {
        let p = ProcessSpec::new("P1", i64::MAX - 1, 5);
        assert_eq!(p.earliest_completion(), i64::MAX);
    }

    #[test]
    fn test_numbered_labels() {
        let labels: Vec<String> = (1..=3)
            .map(|n| ProcessSpec::numbered(n, 0, 1).id)
            .collect();
        assert_eq!(labels, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_priority_defaults_to_none() {
        assert!(ProcessSpec::new("P1", 0, 1).priority.is_none());
    }
}
