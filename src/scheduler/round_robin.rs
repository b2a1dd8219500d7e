//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! FIFO ready queue, fixed time quantum:
//! 1. Enqueue every arrived, incomplete process not already queued.
//! 2. If the queue is empty, idle until the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. If it is not finished, enqueue processes that arrived up to the new
//!    clock *before* putting the preempted process back at the tail.
//!
//! Step 4 means a process arriving exactly when a quantum expires is queued
//! ahead of the preempted one.

use std::collections::VecDeque;

use log::{debug, trace};

use super::simulation::{ScanOrder, Simulation};
use super::{SchedulingAlgorithm, SimulationResult};
use crate::error::SimulationError;
use crate::models::Process;

/// Preemptive Round-Robin with a fixed quantum.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let result = rr
///     .execute(&[Process::new(1, 0, 5), Process::new(2, 0, 3)])
///     .unwrap();
///
/// assert_eq!(result.algorithm_name, "Round Robin (q=2)");
/// assert_eq!(result.makespan(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, SimulationError> {
        if quantum <= 0 {
            return Err(SimulationError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Appends newly ready processes in scan order, skipping `running`.
fn enqueue_arrivals(
    sim: &Simulation,
    queue: &mut VecDeque<usize>,
    queued: &mut [bool],
    running: Option<usize>,
) {
    for idx in sim.ready() {
        if queued[idx] || Some(idx) == running {
            continue;
        }
        queued[idx] = true;
        queue.push_back(idx);
    }
    trace!("t={} queue={:?}", sim.clock(), queue);
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> String {
        format!("Round Robin (q={})", self.quantum)
    }

    fn execute(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let mut sim = Simulation::new(processes, ScanOrder::Arrival)?;
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut queued = vec![false; sim.processes().len()];

        while !sim.is_finished() {
            enqueue_arrivals(&sim, &mut queue, &mut queued, None);

            let Some(idx) = queue.pop_front() else {
                if !sim.idle_until_next_arrival() {
                    break;
                }
                continue;
            };
            queued[idx] = false;

            sim.dispatch(idx);
            let slice = self.quantum.min(sim.process(idx).remaining_time);
            if !sim.execute(idx, slice) {
                enqueue_arrivals(&sim, &mut queue, &mut queued, Some(idx));
                debug!("t={} P{} preempted", sim.clock(), sim.process(idx).id);
                queued[idx] = true;
                queue.push_back(idx);
            }
        }

        sim.finish(self.name())
    }
}
