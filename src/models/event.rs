//! Execution timeline model.
//!
//! An execution event records one contiguous interval `[start, end)` during
//! which the CPU either ran a single process or sat idle.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous CPU interval.
///
/// Under preemptive policies a process may own several non-adjacent events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    /// Running process, or `None` when the CPU was idle.
    pub process_id: Option<ProcessId>,
    /// Interval start (inclusive).
    pub start_time: i64,
    /// Interval end (exclusive).
    pub end_time: i64,
}

impl ExecutionEvent {
    /// Creates an event for a running process.
    pub fn running(process_id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: Some(process_id),
            start_time,
            end_time,
        }
    }

    /// Creates an idle event.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: None,
            start_time,
            end_time,
        }
    }

    /// Whether the CPU was idle during this interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl std::fmt::Display for ExecutionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.process_id {
            Some(id) => write!(f, "Time {}-{}: Process {}", self.start_time, self.end_time, id),
            None => write!(f, "Time {}-{}: IDLE", self.start_time, self.end_time),
        }
    }
}
