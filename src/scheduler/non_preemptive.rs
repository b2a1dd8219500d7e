//! Non-preemptive rule-driven scheduler.
//!
//! # Algorithm
//!
//! 1. Scan order = input processes stably sorted by arrival time.
//! 2. At each decision point, collect arrived and incomplete processes.
//! 3. If none, record an idle interval up to the next arrival.
//! 4. Otherwise select the best candidate by rule engine and run it to
//!    completion.
//!
//! FCFS, SJF, Priority and HRRN are this driver with different rules.
//!
//! # Complexity
//! O(n² · r) where n=processes, r=rules in the chain.

use super::simulation::{ScanOrder, Simulation};
use super::{SchedulingAlgorithm, SimulationResult};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::Process;

/// Non-preemptive scheduler parameterized by a selection rule chain.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{NonPreemptiveScheduler, SchedulingAlgorithm};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = NonPreemptiveScheduler::first_come_first_serve()
///     .execute(&processes)
///     .unwrap();
///
/// assert_eq!(
///     result.timeline_spans(),
///     vec![(Some(1), 0, 5), (Some(2), 5, 8)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    name: String,
    engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler with a custom rule chain.
    pub fn new(name: impl Into<String>, engine: RuleEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// First Come First Serve: arrival order.
    pub fn first_come_first_serve() -> Self {
        Self::new("First Come First Serve", RuleEngine::new().with_rule(rules::Fcfs))
    }

    /// Shortest Job First: minimum total burst.
    pub fn shortest_job_first() -> Self {
        Self::new("Shortest Job First", RuleEngine::new().with_rule(rules::Sjf))
    }

    /// Priority Scheduling: minimum priority value, no aging.
    pub fn priority() -> Self {
        Self::new("Priority Scheduling", RuleEngine::new().with_rule(rules::Priority))
    }

    /// Highest Response Ratio Next: maximum `(waiting + burst) / burst`.
    pub fn highest_response_ratio_next() -> Self {
        Self::new("Highest Response Ratio Next", RuleEngine::new().with_rule(rules::Hrrn))
    }

    /// The rule chain used for selection.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

impl SchedulingAlgorithm for NonPreemptiveScheduler {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn execute(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let mut sim = Simulation::new(processes, ScanOrder::Arrival)?;

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

            sim.dispatch(idx);
            let burst = sim.process(idx).remaining_time;
            sim.execute(idx, burst);
        }

        sim.finish(self.name())
    }
}
