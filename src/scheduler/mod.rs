//! Scheduling algorithms and run metrics.
//!
//! Provides the six classical single-CPU policies behind one
//! [`SchedulingAlgorithm`] trait.
//!
//! # Algorithms
//!
//! | Policy | Driver | Preemptive |
//! |--------|--------|-----------|
//! | FCFS | `NonPreemptiveScheduler` + FCFS rule | no |
//! | SJF | `NonPreemptiveScheduler` + SJF rule | no |
//! | Priority | `NonPreemptiveScheduler` + PRIORITY rule | no |
//! | HRRN | `NonPreemptiveScheduler` + HRRN rule | no |
//! | Round-Robin | `RoundRobin` | quantum expiry |
//! | SRTF | `ShortestRemainingTimeFirst` | on arrival |
//!
//! Every run works on fresh copies of the caller's processes and returns a
//! self-contained [`SimulationResult`].
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod metrics;
mod non_preemptive;
mod result;
mod round_robin;
mod simulation;
mod srtf;

pub use metrics::SimulationMetrics;
pub use non_preemptive::NonPreemptiveScheduler;
pub use result::SimulationResult;
pub use round_robin::RoundRobin;
pub use srtf::ShortestRemainingTimeFirst;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::Process;

/// A single-CPU scheduling policy.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Display name (e.g., "Shortest Job First", "Round Robin (q=2)").
    fn name(&self) -> String;

    /// Simulates the process set to completion.
    ///
    /// The caller's processes are never mutated.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] if the set is empty, has duplicate
    /// IDs, negative arrivals or non-positive bursts.
    fn execute(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError>;
}

/// The built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Fcfs,
    Sjf,
    RoundRobin,
    Priority,
    Srtf,
    Hrrn,
}

impl AlgorithmKind {
    /// All policies in canonical order.
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::RoundRobin,
        AlgorithmKind::Priority,
        AlgorithmKind::Srtf,
        AlgorithmKind::Hrrn,
    ];

    /// Short label (e.g., "FCFS").
    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Sjf => "SJF",
            AlgorithmKind::RoundRobin => "RR",
            AlgorithmKind::Priority => "PRIORITY",
            AlgorithmKind::Srtf => "SRTF",
            AlgorithmKind::Hrrn => "HRRN",
        }
    }

    /// Builds the algorithm. `quantum` is only used by Round-Robin.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] for Round-Robin with `quantum <= 0`.
    pub fn build(&self, quantum: i64) -> Result<Box<dyn SchedulingAlgorithm>, SimulationError> {
        Ok(match self {
            AlgorithmKind::Fcfs => Box::new(NonPreemptiveScheduler::first_come_first_serve()),
            AlgorithmKind::Sjf => Box::new(NonPreemptiveScheduler::shortest_job_first()),
            AlgorithmKind::RoundRobin => Box::new(RoundRobin::new(quantum)?),
            AlgorithmKind::Priority => Box::new(NonPreemptiveScheduler::priority()),
            AlgorithmKind::Srtf => Box::new(ShortestRemainingTimeFirst::new()),
            AlgorithmKind::Hrrn => {
                Box::new(NonPreemptiveScheduler::highest_response_ratio_next())
            }
        })
    }
}

impl std::str::FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(AlgorithmKind::Fcfs),
            "sjf" => Ok(AlgorithmKind::Sjf),
            "rr" | "round_robin" => Ok(AlgorithmKind::RoundRobin),
            "priority" => Ok(AlgorithmKind::Priority),
            "srtf" => Ok(AlgorithmKind::Srtf),
            "hrrn" => Ok(AlgorithmKind::Hrrn),
            other => Err(format!(
                "unknown algorithm '{other}' (expected fcfs, sjf, rr, priority, srtf or hrrn)"
            )),
        }
    }
}

/// Builds the given policies in order.
pub fn build_suite(
    kinds: &[AlgorithmKind],
    quantum: i64,
) -> Result<Vec<Box<dyn SchedulingAlgorithm>>, SimulationError> {
    kinds.iter().map(|k| k.build(quantum)).collect()
}

/// Builds all six policies in canonical order: FCFS, SJF, RR, Priority,
/// SRTF, HRRN.
pub fn standard_suite(quantum: i64) -> Result<Vec<Box<dyn SchedulingAlgorithm>>, SimulationError> {
    build_suite(&AlgorithmKind::ALL, quantum)
}

/// Runs every algorithm on the same process set.
///
/// Each algorithm receives its own fresh copies.
pub fn run_all(
    algorithms: &[Box<dyn SchedulingAlgorithm>],
    processes: &[Process],
) -> Result<Vec<SimulationResult>, SimulationError> {
    algorithms.iter().map(|a| a.execute(processes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::ScenarioGenerator;

    fn suite() -> Vec<Box<dyn SchedulingAlgorithm>> {
        standard_suite(2).unwrap()
    }

    fn scenario_sets() -> Vec<Vec<Process>> {
        let mut sets: Vec<Vec<Process>> = ScenarioGenerator::new(42)
            .generate_all()
            .into_iter()
            .map(|s| s.processes)
            .collect();
        sets.push(vec![Process::new(1, 5, 3)]);
        sets.push(vec![
            Process::new(1, 0, 2),
            Process::new(2, 10, 1),
            Process::new(3, 10, 4),
            Process::new(4, 30, 2),
        ]);
        sets
    }

    fn check_invariants(processes: &[Process], result: &SimulationResult) {
        let name = &result.algorithm_name;

        // Completion invariant
        assert_eq!(result.completed_processes.len(), processes.len(), "{name}");
        for p in processes {
            let done: Vec<_> = result
                .completed_processes
                .iter()
                .filter(|c| c.id == p.id)
                .collect();
            assert_eq!(done.len(), 1, "{name}: P{} completed once", p.id);
            let c = done[0];
            assert!(c.is_completed());

            // Metric identity
            let completion = c.completion_time.unwrap();
            assert_eq!(c.turnaround_time, completion - c.arrival_time, "{name}");
            assert_eq!(c.waiting_time, c.turnaround_time - c.burst_time, "{name}");
            assert!(c.response_time.unwrap() >= 0, "{name}");
            assert!(c.response_time.unwrap() <= c.waiting_time, "{name}");
        }

        // Timeline coverage
        let mut cursor = 0;
        for e in &result.timeline {
            assert_eq!(e.start_time, cursor, "{name}: gap or overlap at {cursor}");
            assert!(e.end_time > e.start_time, "{name}: empty event");
            cursor = e.end_time;
        }
        assert_eq!(cursor, result.makespan(), "{name}");
        assert_eq!(cursor, result.metrics.total_time, "{name}");

        // Busy time per process equals its burst
        for p in processes {
            let busy: i64 = result
                .events_for_process(p.id)
                .iter()
                .map(|e| e.duration())
                .sum();
            assert_eq!(busy, p.burst_time, "{name}: P{}", p.id);
        }

        // Utilization bound
        let util = result.metrics.cpu_utilization;
        assert!((0.0..=100.0).contains(&util), "{name}: {util}");
        assert_eq!((util - 100.0).abs() < 1e-10, !result.has_idle(), "{name}");
        let idle: i64 = result.idle_events().iter().map(|e| e.duration()).sum();
        assert_eq!(idle, result.metrics.idle_time, "{name}");
        assert!(result.metrics.average_response_time.is_some(), "{name}");
    }

    #[test]
    fn test_invariants_all_algorithms_all_scenarios() {
        let algorithms = suite();
        for processes in scenario_sets() {
            for result in run_all(&algorithms, &processes).unwrap() {
                check_invariants(&processes, &result);
            }
        }
    }

    #[test]
    fn test_standard_suite_order() {
        let names: Vec<String> = suite().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "First Come First Serve",
                "Shortest Job First",
                "Round Robin (q=2)",
                "Priority Scheduling",
                "Shortest Remaining Time First",
                "Highest Response Ratio Next",
            ]
        );
    }

    #[test]
    fn test_suite_rejects_bad_quantum() {
        assert!(matches!(
            standard_suite(0),
            Err(SimulationError::InvalidQuantum(0))
        ));
        // Quantum is irrelevant without Round-Robin
        assert!(build_suite(&[AlgorithmKind::Fcfs], 0).is_ok());
    }

    #[test]
    fn test_leading_idle_everywhere() {
        let processes = vec![Process::new(1, 5, 3)];
        for result in run_all(&suite(), &processes).unwrap() {
            let first = result.timeline[0];
            assert!(first.is_idle(), "{}", result.algorithm_name);
            assert_eq!((first.start_time, first.end_time), (0, 5));
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let algorithms = suite();
        let first = run_all(&algorithms, &processes).unwrap();
        let second = run_all(&algorithms, &processes).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.timeline, b.timeline);
            assert_eq!(a.metrics, b.metrics);
        }
    }

    #[test]
    fn test_concurrent_runs() {
        let processes = ScenarioGenerator::new(7).mixed_processes().processes;
        let expected = run_all(&suite(), &processes).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let processes = processes.clone();
                std::thread::spawn(move || run_all(&standard_suite(2).unwrap(), &processes))
            })
            .collect();

        for handle in handles {
            let results = handle.join().unwrap().unwrap();
            for (a, b) in results.iter().zip(&expected) {
                assert_eq!(a.timeline, b.timeline);
            }
        }
    }

    #[test]
    fn test_empty_input_rejected_by_all() {
        for algorithm in suite() {
            assert!(matches!(
                algorithm.execute(&[]),
                Err(SimulationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_algorithm_kind_parse() {
        assert_eq!("RR".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::RoundRobin);
        assert_eq!("hrrn".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Hrrn);
        assert!("lottery".parse::<AlgorithmKind>().is_err());
        assert_eq!(AlgorithmKind::Srtf.label(), "SRTF");
    }

    #[test]
    fn test_result_serializes() {
        let result = NonPreemptiveScheduler::first_come_first_serve()
            .execute(&[Process::new(1, 2, 3)])
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, result.timeline);
        assert_eq!(back.completed_processes, result.completed_processes);
        assert!(json.contains("\"process_id\":null"));
    }
}
