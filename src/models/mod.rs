//! CPU-scheduling domain models.
//!
//! Provides the input and output data types shared by every policy.
//! The types carry no behavior beyond simple queries; validation lives
//! in [`crate::validation`] and the algorithms in [`crate::policy`].
//!
//! # Domain Mappings
//!
//! | u-cpusched | Gantt chart | Metrics table |
//! |------------|-------------|---------------|
//! | ProcessSpec | Row label | Input columns |
//! | ExecutionInterval | Bar | - |
//! | ProcessResult | - | Row |
//! | SimulationResult | Whole chart | Table + averages |

mod process;
mod result;

pub use process::ProcessSpec;
pub use result::{ExecutionInterval, ProcessResult, SimulationResult};
