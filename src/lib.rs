//! Uniprocessor CPU-scheduling simulator.
//!
//! Simulates classic scheduling policies over a finite set of processes
//! and computes per-process start, completion, waiting, and turnaround
//! times plus the ordered execution timeline needed for a Gantt chart.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ExecutionInterval`,
//!   `ProcessResult`, `SimulationResult`
//! - **`policy`**: FCFS, SJF, SRTF, Round Robin, and Priority behind the
//!   `SchedulingPolicy` trait; `PolicyKind` and `PolicyParams`
//! - **`simulator`**: `simulate`, `SimulationRequest`, `TimelineBuilder`,
//!   and `SimulationKpi`
//! - **`validation`**: Input integrity checks (negative arrivals,
//!   non-positive bursts, duplicate IDs, missing priorities, bad quantum,
//!   `i64` overflow)
//! - **`error`**: `SchedulingError`
//!
//! # Architecture
//!
//! Every run is a pure function of its inputs: the caller's process list
//! is borrowed immutably and a fresh result is returned. Presentation
//! (forms, charts, tables) is left to the caller, which needs only the
//! serde-serializable types in `models`.
//!
//! # Example
//!
//! ```
//! use u_cpusched::{simulate, PolicyKind, PolicyParams, ProcessSpec};
//!
//! let processes = vec![
//!     ProcessSpec::new("P1", 0, 4),
//!     ProcessSpec::new("P2", 1, 3),
//!     ProcessSpec::new("P3", 2, 1),
//! ];
//! let result = simulate(PolicyKind::RoundRobin, &processes, &PolicyParams::new(2)).unwrap();
//!
//! assert_eq!(result.intervals.len(), 5);
//! assert!((result.average_waiting_time - 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policy;
pub mod simulator;
pub mod validation;

pub use error::SchedulingError;
pub use models::{ExecutionInterval, ProcessResult, ProcessSpec, SimulationResult};
pub use policy::{PolicyKind, PolicyParams};
pub use simulator::{simulate, SimulationKpi, SimulationRequest};
