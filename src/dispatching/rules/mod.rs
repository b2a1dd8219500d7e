//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Order-based**: FCFS
//! - **Work-based**: SJF, SRT
//! - **Priority**: PRIORITY
//! - **Aging**: HRRN
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use std::cmp::Ordering;

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::models::Process;

/// First Come First Serve.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SelectionRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.arrival_time.cmp(&b.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First Come First Serve"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the shortest total burst. Ignores work
/// already done, so it is meant for non-preemptive dispatch.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl SelectionRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.burst_time.cmp(&b.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl SelectionRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.remaining_time.cmp(&b.remaining_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Static priority.
///
/// Lower priority value = more urgent. No aging.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl SelectionRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &SchedulingContext) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }
}

/// Highest Response Ratio Next.
///
/// Ratio = (waiting + burst) / burst, recomputed at every decision point.
/// Long waits raise the ratio, so long jobs cannot starve behind a stream
/// of short ones.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl SelectionRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        -process.response_ratio(context.current_time) // Higher ratio = higher priority → negate
    }

    /// Exact ratio comparison: `(t - a₁ + b₁) · b₂` against `(t - a₂ + b₂) · b₁`.
    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        if a.burst_time <= 0 || b.burst_time <= 0 {
            return self
                .evaluate(a, context)
                .partial_cmp(&self.evaluate(b, context))
                .unwrap_or(Ordering::Equal);
        }
        let t = i128::from(context.current_time);
        let numerator = |p: &Process| {
            t - i128::from(p.arrival_time) + i128::from(p.burst_time)
        };
        let lhs = numerator(a) * i128::from(b.burst_time);
        let rhs = numerator(b) * i128::from(a.burst_time);
        // Higher ratio first.
        rhs.cmp(&lhs)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(id, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_fcfs_score() {
        let ctx = SchedulingContext::at_time(10);
        let early = make_process(1, 2, 5, 0);
        let late = make_process(2, 7, 1, 0);
        assert!(Fcfs.evaluate(&early, &ctx) < Fcfs.evaluate(&late, &ctx));
    }

    #[test]
    fn test_sjf_ignores_progress() {
        let ctx = SchedulingContext::at_time(0);
        let mut p = make_process(1, 0, 8, 0);
        p.consume(6);
        assert!((Sjf.evaluate(&p, &ctx) - 8.0).abs() < 1e-10);
        assert!((Srt.evaluate(&p, &ctx) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_score() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = make_process(1, 0, 5, 1);
        let relaxed = make_process(2, 0, 5, 4);
        assert!(Priority.evaluate(&urgent, &ctx) < Priority.evaluate(&relaxed, &ctx));
    }

    #[test]
    fn test_hrrn_prefers_long_waiter() {
        let ctx = SchedulingContext::at_time(20);
        // Waited 20 with burst 10 → ratio 3.0
        let waiter = make_process(1, 0, 10, 0);
        // Waited 2 with burst 2 → ratio 2.0
        let fresh = make_process(2, 18, 2, 0);
        assert!(Hrrn.evaluate(&waiter, &ctx) < Hrrn.evaluate(&fresh, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Srt.name(), "SRT");
        assert_eq!(Priority.name(), "PRIORITY");
        assert_eq!(Hrrn.description(), "Highest Response Ratio Next");
    }

    #[test]
    fn test_integer_keys_compare_exactly() {
        let ctx = SchedulingContext::at_time(0);
        // Adjacent integers above 2^53 collapse to the same f64.
        let big = 1_i64 << 54;
        let a = make_process(1, 0, big, 0);
        let b = make_process(2, 0, big + 1, 0);
        assert_eq!(Sjf.evaluate(&a, &ctx), Sjf.evaluate(&b, &ctx));
        assert_eq!(Sjf.compare(&a, &b, &ctx), Ordering::Less);
        assert_eq!(Srt.compare(&b, &a, &ctx), Ordering::Greater);
        assert_eq!(Fcfs.compare(&a, &a, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_hrrn_compare_exact_ratios() {
        // At t=3: 200_005 / 200_003 < 100_002 / 100_001, a gap below 1e-9.
        let ctx = SchedulingContext::at_time(3);
        let p2 = make_process(2, 1, 200_003, 0);
        let p3 = make_process(3, 2, 100_001, 0);
        assert_eq!(Hrrn.compare(&p3, &p2, &ctx), Ordering::Less);
        assert_eq!(Hrrn.compare(&p2, &p3, &ctx), Ordering::Greater);

        let ctx = SchedulingContext::at_time(2);
        let short = make_process(1, 0, 2, 0); // 4/2
        let late = make_process(2, 1, 3, 0); // 4/3
        assert_eq!(Hrrn.compare(&short, &late, &ctx), Ordering::Less);

        // Equal ratios tie: 4/2 == 6/3.
        let ctx = SchedulingContext::at_time(3);
        let a = make_process(3, 1, 2, 0);
        let b = make_process(4, 0, 3, 0);
        assert_eq!(Hrrn.compare(&a, &b, &ctx), Ordering::Equal);
    }
}
