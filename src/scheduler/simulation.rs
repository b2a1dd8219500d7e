//! Shared simulation state.
//!
//! Every driver runs on a [`Simulation`]: an arena of working process
//! copies addressed by index, the clock, the accumulated idle time, the
//! timeline and the completion order. Drivers differ only in how they pick
//! the next index and for how long it runs.

use log::{debug, info, trace};

use super::{SimulationMetrics, SimulationResult};
use crate::error::SimulationError;
use crate::models::{ExecutionEvent, Process};
use crate::validation::validate_processes;

/// Order in which candidates are scanned when rules tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanOrder {
    /// Stable sort by arrival time.
    Arrival,
    /// Caller's input order.
    Input,
}

pub(crate) struct Simulation {
    processes: Vec<Process>,
    timeline: Vec<ExecutionEvent>,
    completion_order: Vec<usize>,
    clock: i64,
    idle_time: i64,
}

impl Simulation {
    /// Validates the input and builds fresh working copies.
    pub(crate) fn new(input: &[Process], order: ScanOrder) -> Result<Self, SimulationError> {
        validate_processes(input).map_err(SimulationError::InvalidInput)?;

        let mut processes: Vec<Process> = input.iter().map(Process::fresh_copy).collect();
        if order == ScanOrder::Arrival {
            processes.sort_by_key(|p| p.arrival_time);
        }

        Ok(Self {
            timeline: Vec::with_capacity(processes.len()),
            completion_order: Vec::with_capacity(processes.len()),
            processes,
            clock: 0,
            idle_time: 0,
        })
    }

    #[inline]
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    #[inline]
    pub(crate) fn processes(&self) -> &[Process] {
        &self.processes
    }

    #[inline]
    pub(crate) fn process(&self, idx: usize) -> &Process {
        &self.processes[idx]
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.completion_order.len() == self.processes.len()
    }

    /// Indices of arrived, incomplete processes in scan order.
    pub(crate) fn ready(&self) -> Vec<usize> {
        let ready: Vec<usize> = self
            .processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(self.clock) && !p.is_completed())
            .map(|(i, _)| i)
            .collect();
        trace!("t={} ready={:?}", self.clock, ready);
        ready
    }

    /// Earliest arrival strictly after the clock among incomplete processes.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.processes
            .iter()
            .filter(|p| !p.is_completed() && p.arrival_time > self.clock)
            .map(|p| p.arrival_time)
            .min()
    }

    /// Earliest arrival strictly inside `(clock, limit)`.
    pub(crate) fn next_arrival_before(&self, limit: i64) -> Option<i64> {
        self.next_arrival().filter(|&t| t < limit)
    }

    /// Emits an idle event up to the next arrival and jumps the clock there.
    ///
    /// Returns `false` when no incomplete process is still to arrive.
    pub(crate) fn idle_until_next_arrival(&mut self) -> bool {
        let Some(next) = self.next_arrival() else {
            return false;
        };
        debug!("t={} idle until {}", self.clock, next);
        self.timeline.push(ExecutionEvent::idle(self.clock, next));
        self.idle_time += next - self.clock;
        self.clock = next;
        true
    }

    /// Records a dispatch; sets the response time on first dispatch only.
    pub(crate) fn dispatch(&mut self, idx: usize) {
        let clock = self.clock;
        let process = &mut self.processes[idx];
        debug!("t={} dispatch P{}", clock, process.id);
        process.mark_dispatched(clock);
    }

    /// Runs a process for `duration` without touching the timeline.
    ///
    /// Returns `true` if the process completed.
    pub(crate) fn advance(&mut self, idx: usize, duration: i64) -> bool {
        self.clock += duration;
        let clock = self.clock;
        let process = &mut self.processes[idx];
        process.consume(duration);

        if process.is_completed() {
            process.finalize(clock);
            debug!("t={} P{} completed", clock, process.id);
            self.completion_order.push(idx);
            true
        } else {
            false
        }
    }

    /// Runs a process for `duration` and records the interval.
    ///
    /// Returns `true` if the process completed.
    pub(crate) fn execute(&mut self, idx: usize, duration: i64) -> bool {
        let start = self.clock;
        let id = self.processes[idx].id;
        let completed = self.advance(idx, duration);
        self.record(ExecutionEvent::running(id, start, self.clock));
        completed
    }

    pub(crate) fn record(&mut self, event: ExecutionEvent) {
        self.timeline.push(event);
    }

    /// Aggregates metrics and packages the result.
    pub(crate) fn finish(
        self,
        algorithm_name: String,
    ) -> Result<SimulationResult, SimulationError> {
        debug_assert!(self.is_finished(), "simulation ended with incomplete processes");

        let completed_processes: Vec<Process> = self
            .completion_order
            .iter()
            .map(|&i| self.processes[i].clone())
            .collect();
        let metrics =
            SimulationMetrics::calculate(&completed_processes, self.clock, self.idle_time)?;

        info!(
            "{}: {} processes in {} units (idle {}), avg waiting {:.2}",
            algorithm_name,
            completed_processes.len(),
            metrics.total_time,
            metrics.idle_time,
            metrics.average_waiting_time
        );

        Ok(SimulationResult {
            algorithm_name,
            timeline: self.timeline,
            completed_processes,
            metrics,
        })
    }
}
