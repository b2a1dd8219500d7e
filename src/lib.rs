//! Deterministic single-CPU scheduling simulator.
//!
//! Runs classical process scheduling policies over a set of processes and
//! reports per-process timing, an execution timeline and aggregate metrics,
//! so policies can be compared on identical workloads.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionEvent`
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, bad times)
//! - **`dispatching`**: Selection rules (FCFS, SJF, SRT, PRIORITY, HRRN) and `RuleEngine`
//! - **`scheduler`**: The six policies, `SimulationResult` and `SimulationMetrics`
//! - **`scenarios`**: Seeded workload generator
//! - **`report`**: Cross-algorithm comparison, scoring and text rendering
//! - **`config`**: JSON run configuration
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::{standard_suite, SchedulingAlgorithm};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! for algorithm in standard_suite(2).unwrap() {
//!     let result = algorithm.execute(&processes).unwrap();
//!     assert_eq!(result.completed_processes.len(), 2);
//!     assert_eq!(result.metrics.total_time, 8);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scenarios;
pub mod scheduler;
pub mod validation;
