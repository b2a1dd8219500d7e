//! Process model.
//!
//! A process is a single CPU-bound unit of work known in full before the
//! simulation starts: an arrival time, a total burst and a static priority.
//! The remaining fields are simulation state written by the algorithm that
//! owns the working copy.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u32;

/// A schedulable process and its per-run simulation state.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
///
/// # Invariants
/// Once `completion_time` is set:
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static priority (lower = more urgent).
    pub priority: i32,
    /// CPU time still owed. The process is complete once this reaches zero.
    pub remaining_time: i64,
    /// First dispatch minus arrival. `None` until first scheduled.
    pub response_time: Option<i64>,
    /// Time spent ready but not running. Valid after completion.
    pub waiting_time: i64,
    /// Completion minus arrival. Valid after completion.
    pub turnaround_time: i64,
    /// Time at which the last unit of work finished.
    pub completion_time: Option<i64>,
}

impl Process {
    /// Creates a process with priority 0 and fresh simulation state.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            response_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: None,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns an independent copy carrying the same inputs and reset state.
    ///
    /// Every simulation run starts from such a copy, so results of earlier
    /// runs never leak into later ones.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time).with_priority(self.priority)
    }

    /// Whether all work has been performed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Whether the process is eligible to run at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.response_time.is_some()
    }

    /// Records the first dispatch. Later dispatches leave the value untouched.
    pub(crate) fn mark_dispatched(&mut self, time: i64) {
        if self.response_time.is_none() {
            self.response_time = Some(time - self.arrival_time);
        }
    }

    /// Consumes `duration` units of remaining work.
    pub(crate) fn consume(&mut self, duration: i64) {
        self.remaining_time -= duration;
    }

    /// Finalizes timing fields at `time`.
    pub(crate) fn finalize(&mut self, time: i64) {
        self.completion_time = Some(time);
        self.turnaround_time = time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Response ratio `(waiting + burst) / burst` at `time`.
    ///
    /// Used by HRRN. Returns `f64::MAX` for a zero burst.
    pub fn response_ratio(&self, time: i64) -> f64 {
        if self.burst_time <= 0 {
            return f64::MAX;
        }
        let waiting = (time - self.arrival_time) as f64;
        (waiting + self.burst_time as f64) / self.burst_time as f64
    }
}
