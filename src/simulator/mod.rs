//! Simulation driver, timeline builder, and KPI evaluation.
//!
//! Control flow for one run:
//!
//! ```text
//! simulate(kind, processes, params)
//!   -> validation
//!   -> kind.policy(params).schedule(processes, &mut TimelineBuilder)
//!   -> TimelineBuilder::build() -> SimulationResult
//! ```
//!
//! `SimulationKpi` derives further indicators (utilization, throughput,
//! context switches) from a finished result.

mod builder;
mod kpi;
mod simulate;


pub use builder::TimelineBuilder;
pub use kpi::SimulationKpi;
pub use simulate::{simulate, SimulationRequest};
