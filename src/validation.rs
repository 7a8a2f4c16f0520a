//! Input validation for simulation runs.
//!
//! Checks structural integrity of process specifications before any
//! policy runs. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate IDs
//! - Missing priorities (Priority policy only)
//! - Non-positive quantum (Round Robin only)
//! - Timelines too long to represent in `i64` ticks
//!
//! All problems are collected, so a caller can surface every mistake in
//! a single round trip.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative service.
    NonPositiveBurst,
    /// Two processes share the same ID.
    DuplicateId,
    /// The Priority policy was selected but a process has no priority.
    MissingPriority,
    /// Round Robin was given a quantum below 1.
    NonPositiveQuantum,
    /// The schedule horizon or the turnaround total would overflow `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the process list shared by every policy.
///
/// Checks:
/// 1. No negative arrival times
/// 2. No burst time below 1
/// 3. No duplicate process IDs
/// 4. `max(arrival) + Σburst`, and that horizon times the process count,
///    fit in `i64`
///
/// Check 4 bounds every completion time and the turnaround total, so the
/// policies and the timeline builder never overflow on accepted input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        if let Err(e) = validate_time_range(processes) {
            errors.push(e);
        }
    }

    into_result(errors)
}

/// Checks that the latest possible completion and the sum of all
/// turnaround times are representable.
fn validate_time_range(processes: &[ProcessSpec]) -> Result<(), ValidationError> {
    let overflow = || {
        ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate without overflow",
        )
    };

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
        .ok_or_else(overflow)?;

    let count = i64::try_from(processes.len()).map_err(|_| overflow())?;
    horizon.checked_mul(count).ok_or_else(overflow)?;
    Ok(())
}

/// Checks that every process carries a priority.
pub fn validate_priorities(processes: &[ProcessSpec]) -> ValidationResult {
    let errors = processes
        .iter()
        .filter(|p| p.priority.is_none())
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            )
        })
        .collect();

    into_result(errors)
}

/// Checks that a Round Robin quantum is strictly positive.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    } else {
        Ok(())
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
