//! Error type returned by simulation runs.

use std::fmt;

use crate::validation::ValidationError;

/// Why a simulation could not be run.
///
/// Scheduling edge cases (ties, simultaneous arrivals, idle gaps) are
/// never errors; they are resolved deterministically by each policy.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// No processes were supplied.
    EmptyInput,
    /// One or more inputs failed validation.
    InvalidInput(Vec<ValidationError>),
}

impl SchedulingError {
    /// Validation problems carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::EmptyInput => &[],
            Self::InvalidInput(errors) => errors,
        }
    }
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("no processes to schedule"),
            Self::InvalidInput(errors) => {
                f.write_str("invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
