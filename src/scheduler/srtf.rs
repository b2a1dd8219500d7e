//! Shortest-Remaining-Time-First scheduler.
//!
//! # Algorithm
//!
//! At time `t`, pick the arrived, incomplete process with the least
//! remaining work (first in input order on ties). Run it until the earlier
//! of its completion or the next arrival strictly inside its remaining
//! window, then decide again. A new timeline event opens only when the
//! running process changes; the previous one is closed at the switch.
//!
//! Each iteration either completes a process or reaches an arrival, so the
//! loop runs at most `2n` times.

use log::debug;

use super::simulation::{ScanOrder, Simulation};
use super::{SchedulingAlgorithm, SimulationResult};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{ExecutionEvent, Process};

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone)]
pub struct ShortestRemainingTimeFirst {
    engine: RuleEngine,
}

impl ShortestRemainingTimeFirst {
    /// Creates the scheduler with the SRT rule.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::Srt),
        }
    }
}

impl Default for ShortestRemainingTimeFirst {
    fn default() -> Self {
        Self::new()
    }
}

/// The process currently holding the CPU and when its event opened.
#[derive(Debug, Clone, Copy)]
struct OpenEvent {
    idx: usize,
    start: i64,
}

impl SchedulingAlgorithm for ShortestRemainingTimeFirst {
    fn name(&self) -> String {
        "Shortest Remaining Time First".to_string()
    }

    fn execute(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let mut sim = Simulation::new(processes, ScanOrder::Input)?;
        let mut open: Option<OpenEvent> = None;

        while !sim.is_finished() {
            let ready = sim.ready();
            if ready.is_empty() {
                if !sim.idle_until_next_arrival() {
                    break;
                }
                continue;
            }

            let context = SchedulingContext::at_time(sim.clock());
            let Some(idx) = self.engine.select_best(sim.processes(), &ready, &context) else {
                break;
            };

            if open.map(|o| o.idx) != Some(idx) {
                if let Some(prev) = open.take() {
                    let id = sim.process(prev.idx).id;
                    debug!("t={} P{} preempted", sim.clock(), id);
                    sim.record(ExecutionEvent::running(id, prev.start, sim.clock()));
                }
                sim.dispatch(idx);
                open = Some(OpenEvent {
                    idx,
                    start: sim.clock(),
                });
            }

            let finish_at = sim.clock() + sim.process(idx).remaining_time;
            let run_until = sim.next_arrival_before(finish_at).unwrap_or(finish_at);

            if sim.advance(idx, run_until - sim.clock()) {
                if let Some(done) = open.take() {
                    let id = sim.process(done.idx).id;
                    sim.record(ExecutionEvent::running(id, done.start, sim.clock()));
                }
            }
        }

        sim.finish(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srtf(processes: &[Process]) -> SimulationResult {
        ShortestRemainingTimeFirst::new().execute(processes).unwrap()
    }

    #[test]
    fn test_classic_preemption() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let result = srtf(&processes);

        assert_eq!(
            result.timeline_spans(),
            vec![
                (Some(1), 0, 1),
                (Some(2), 1, 5),
                (Some(4), 5, 10),
                (Some(1), 10, 17),
                (Some(3), 17, 26)
            ]
        );
        assert!(result.events_for_process(1).len() > 1);
        assert_eq!(result.completed_process(1).unwrap().response_time, Some(0));
        assert!((result.metrics.average_waiting_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_no_split_without_switch() {
        // P2 arrives mid-run but is longer → P1 keeps one contiguous event
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 6)];
        let result = srtf(&processes);

        assert_eq!(
            result.timeline_spans(),
            vec![(Some(1), 0, 4), (Some(2), 4, 10)]
        );
    }

    #[test]
    fn test_resumed_process_keeps_response_time() {
        let processes = vec![Process::new(1, 1, 6), Process::new(2, 2, 1)];
        let result = srtf(&processes);

        assert_eq!(
            result.timeline_spans(),
            vec![(None, 0, 1), (Some(1), 1, 2), (Some(2), 2, 3), (Some(1), 3, 8)]
        );
        let p1 = result.completed_process(1).unwrap();
        assert_eq!(p1.response_time, Some(0));
        assert_eq!(p1.waiting_time, 1);
    }

    #[test]
    fn test_tie_uses_input_order() {
        // Same remaining time; input order (not arrival order) decides
        let processes = vec![Process::new(7, 0, 3), Process::new(3, 0, 3)];
        let result = srtf(&processes);
        assert_eq!(result.completed_processes[0].id, 7);
    }

    #[test]
    fn test_completion_order() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 1)];
        let result = srtf(&processes);
        let order: Vec<u32> = result.completed_processes.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_idle_between_bursts() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 2)];
        let result = srtf(&processes);

        assert_eq!(
            result.timeline_spans(),
            vec![(Some(1), 0, 2), (None, 2, 5), (Some(2), 5, 7)]
        );
        assert!((result.metrics.cpu_utilization - 400.0 / 7.0).abs() < 1e-10);
    }
}
