//! Selection rules and rule engine for process dispatching.
//!
//! Every non-preemptive policy, and the selection step of SRTF, is a rule
//! chain applied to the ready set: FCFS orders by arrival, SJF by burst,
//! Priority by priority value, SRT by remaining work and HRRN by response
//! ratio.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{RuleEngine, SchedulingContext};
//! use cpu_sched_sim::dispatching::rules;
//! use cpu_sched_sim::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 8), Process::new(2, 0, 3)];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Sjf)
//!     .with_tie_breaker(rules::Priority);
//!
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&processes, &[0, 1], &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules whose natural measure is
/// "higher is better" (such as the HRRN response ratio) negate it.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current simulated time.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Orders two processes; `Less` means `a` is dispatched first.
    ///
    /// Defaults to comparing [`evaluate`](Self::evaluate) scores. Rules
    /// backed by integer keys override this to compare without rounding.
    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        self.evaluate(a, context)
            .partial_cmp(&self.evaluate(b, context))
            .unwrap_or(Ordering::Equal)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
