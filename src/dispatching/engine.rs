//! Rule engine for multi-criteria process selection.
//!
//! Composes selection rules in sequence: a later rule is consulted only
//! when every earlier rule ties. When the whole chain ties, the final
//! tie-breaker decides.
//!
//! Rules compare exactly by default. [`RuleEngine::with_epsilon`] switches
//! to score comparison with a tolerance.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the candidate encountered first in scan order (default).
    #[default]
    ScanOrder,
    /// Lowest process ID wins.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::{RuleEngine, SchedulingContext, TieBreaker};
/// use cpu_sched_sim::dispatching::rules;
/// use cpu_sched_sim::models::Process;
///
/// let processes = vec![Process::new(9, 0, 4), Process::new(2, 0, 4)];
/// let engine = RuleEngine::new()
///     .with_rule(rules::Sjf)
///     .with_final_tie_breaker(TieBreaker::ById);
///
/// let ctx = SchedulingContext::at_time(0);
/// assert_eq!(engine.select_best(&processes, &[0, 1], &ctx), Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
    epsilon: Option<f64>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ScanOrder,
            epsilon: None,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Treats scores within `epsilon` of each other as ties.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Name of the primary rule, if any.
    pub fn primary_rule_name(&self) -> Option<&'static str> {
        self.rules.first().map(|r| r.name())
    }

    /// Selects the best candidate.
    ///
    /// `candidates` are indices into `processes`, in scan order. Returns the
    /// index of the winning process; among equally ranked candidates the one
    /// encountered first wins unless [`TieBreaker::ById`] is set.
    pub fn select_best(
        &self,
        processes: &[Process],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Option<usize> {
        // min_by keeps the first of several equal minima.
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b], context))
    }

    /// Sorts candidate indices by rule evaluation (best first, stable).
    pub fn sort_indices(
        &self,
        processes: &[Process],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut indices = candidates.to_vec();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ordering = match self.epsilon {
                None => rule.compare(a, b, context),
                Some(epsilon) => {
                    let score_a = rule.evaluate(a, context);
                    let score_b = rule.evaluate(b, context);
                    if (score_a - score_b).abs() > epsilon {
                        score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal)
                    } else {
                        Ordering::Equal
                    }
                }
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match self.tie_breaker {
            TieBreaker::ScanOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
