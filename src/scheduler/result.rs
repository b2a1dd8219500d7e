//! Simulation result model.

use serde::{Deserialize, Serialize};

use super::SimulationMetrics;
use crate::models::{ExecutionEvent, Process, ProcessId};

/// Output of one algorithm run.
///
/// Fully self-contained: the timeline and processes are owned copies, never
/// references back into caller data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Display name of the algorithm that produced this result.
    pub algorithm_name: String,
    /// Chronological, non-overlapping intervals covering `[0, total_time)`.
    pub timeline: Vec<ExecutionEvent>,
    /// Every input process in completion order, with final timing fields.
    pub completed_processes: Vec<Process>,
    /// Aggregate metrics.
    pub metrics: SimulationMetrics,
}

impl SimulationResult {
    /// Finds the completed record of a process.
    pub fn completed_process(&self, id: ProcessId) -> Option<&Process> {
        self.completed_processes.iter().find(|p| p.id == id)
    }

    /// Returns all timeline events of a process.
    pub fn events_for_process(&self, id: ProcessId) -> Vec<&ExecutionEvent> {
        self.timeline
            .iter()
            .filter(|e| e.process_id == Some(id))
            .collect()
    }

    /// Returns the idle intervals.
    pub fn idle_events(&self) -> Vec<&ExecutionEvent> {
        self.timeline.iter().filter(|e| e.is_idle()).collect()
    }

    /// Whether the CPU was ever idle.
    pub fn has_idle(&self) -> bool {
        self.timeline.iter().any(ExecutionEvent::is_idle)
    }

    /// Latest completion time across all processes.
    pub fn makespan(&self) -> i64 {
        self.completed_processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Compact timeline as `(process, start, end)` triples.
    pub fn timeline_spans(&self) -> Vec<(Option<ProcessId>, i64, i64)> {
        self.timeline
            .iter()
            .map(|e| (e.process_id, e.start_time, e.end_time))
            .collect()
    }
}
