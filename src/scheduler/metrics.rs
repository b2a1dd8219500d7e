//! Simulation performance metrics.
//!
//! Reduces a completed run to the standard CPU scheduling aggregates.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Σ waiting / n |
//! | Avg Turnaround | Σ (completion - arrival) / n |
//! | Avg Response | Σ (first dispatch - arrival) / n |
//! | CPU Utilization | (T - idle) / T × 100 |
//! | Throughput | n / T |
//!
//! `T` is the clock value the simulation loop terminated with.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::Process;

/// Aggregate metrics of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time. `None` if any process was never dispatched.
    pub average_response_time: Option<f64>,
    /// Percentage of simulated time the CPU was busy (0..=100).
    pub cpu_utilization: f64,
    /// Completed processes per unit of simulated time.
    pub throughput: f64,
    /// Total simulated time.
    pub total_time: i64,
    /// Accumulated idle time.
    pub idle_time: i64,
}

impl SimulationMetrics {
    /// Computes metrics from the completed processes of a run.
    ///
    /// # Arguments
    /// * `completed` - Every process of the run, each with final timing fields.
    /// * `total_time` - Final simulation clock.
    /// * `idle_time` - Sum of idle interval lengths.
    ///
    /// # Errors
    /// [`SimulationError::DegenerateTimeline`] if `total_time` is not
    /// positive or nothing completed.
    pub fn calculate(
        completed: &[Process],
        total_time: i64,
        idle_time: i64,
    ) -> Result<Self, SimulationError> {
        if total_time <= 0 || completed.is_empty() {
            return Err(SimulationError::DegenerateTimeline {
                total_time,
                completed: completed.len(),
            });
        }

        let n = completed.len() as f64;
        let total_waiting: i64 = completed.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = completed.iter().map(|p| p.turnaround_time).sum();
        let total_response: Option<i64> = completed.iter().map(|p| p.response_time).sum();

        let elapsed = total_time as f64;

        Ok(Self {
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            average_response_time: total_response.map(|sum| sum as f64 / n),
            cpu_utilization: (total_time - idle_time) as f64 / elapsed * 100.0,
            throughput: n / elapsed,
            total_time,
            idle_time,
        })
    }

    /// Time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.total_time - self.idle_time
    }
}
