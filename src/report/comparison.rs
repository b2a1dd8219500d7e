//! Algorithm comparison and scoring.
//!
//! # Per-scenario winners
//!
//! | Metric | Better |
//! |--------|--------|
//! | Avg Waiting | lower |
//! | Avg Turnaround | lower |
//! | CPU Utilization | higher |
//! | Throughput | higher |
//!
//! Ties go to the algorithm listed first.

use serde::Serialize;

use crate::error::SimulationError;
use crate::models::Process;
use crate::scenarios::{Scenario, ScenarioKind};
use crate::scheduler::{run_all, SchedulingAlgorithm, SimulationResult};

/// All algorithm results for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResults {
    /// Scenario family.
    pub kind: ScenarioKind,
    /// Input process set.
    pub processes: Vec<Process>,
    /// One result per algorithm, in suite order.
    pub results: Vec<SimulationResult>,
}

impl ScenarioResults {
    /// Runs every algorithm on the scenario's process set.
    pub fn run(
        scenario: Scenario,
        algorithms: &[Box<dyn SchedulingAlgorithm>],
    ) -> Result<Self, SimulationError> {
        let results = run_all(algorithms, &scenario.processes)?;
        log::info!("{}: {} algorithms compared", scenario.name(), results.len());
        Ok(Self {
            kind: scenario.kind,
            processes: scenario.processes,
            results,
        })
    }
}

/// Winning algorithm and its value for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricWinner {
    pub algorithm: String,
    pub value: f64,
}

/// Best algorithm per metric within one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub best_waiting: MetricWinner,
    pub best_turnaround: MetricWinner,
    pub best_utilization: MetricWinner,
    pub best_throughput: MetricWinner,
}

impl ScenarioComparison {
    /// Finds per-metric winners. Returns `None` for an empty result set.
    pub fn from_results(results: &[SimulationResult]) -> Option<Self> {
        Some(Self {
            best_waiting: first_best(results, |r| r.metrics.average_waiting_time, lower)?,
            best_turnaround: first_best(results, |r| r.metrics.average_turnaround_time, lower)?,
            best_utilization: first_best(results, |r| r.metrics.cpu_utilization, higher)?,
            best_throughput: first_best(results, |r| r.metrics.throughput, higher)?,
        })
    }
}

/// Cross-scenario averages for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: String,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_cpu_utilization: f64,
    pub avg_throughput: f64,
    /// `None` if any scenario lacked a response time average.
    pub avg_response_time: Option<f64>,
    /// Scenario-level metric wins.
    pub wins: usize,
}

impl AlgorithmSummary {
    fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            avg_waiting_time: 0.0,
            avg_turnaround_time: 0.0,
            avg_cpu_utilization: 0.0,
            avg_throughput: 0.0,
            avg_response_time: Some(0.0),
            wins: 0,
        }
    }
}

/// Aggregated comparison across all scenarios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallComparison {
    /// One summary per algorithm, in suite order.
    pub summaries: Vec<AlgorithmSummary>,
    /// Number of scenarios aggregated.
    pub scenario_count: usize,
}

impl OverallComparison {
    /// Averages every algorithm's metrics across scenarios and counts wins.
    ///
    /// # Win Counting
    /// Per scenario, the waiting-time winner gets a win; the turnaround
    /// winner gets one if it differs from the waiting winner; the
    /// utilization winner if it differs from both; the throughput winner
    /// if it differs from all three. An algorithm therefore earns at most
    /// one win per scenario.
    pub fn from_scenarios(scenarios: &[ScenarioResults]) -> Self {
        let mut summaries: Vec<AlgorithmSummary> = scenarios
            .first()
            .map(|s| {
                s.results
                    .iter()
                    .map(|r| AlgorithmSummary::new(&r.algorithm_name))
                    .collect()
            })
            .unwrap_or_default();

        for scenario in scenarios {
            for result in &scenario.results {
                let Some(summary) = summaries
                    .iter_mut()
                    .find(|s| s.algorithm == result.algorithm_name)
                else {
                    continue;
                };
                let m = &result.metrics;
                summary.avg_waiting_time += m.average_waiting_time;
                summary.avg_turnaround_time += m.average_turnaround_time;
                summary.avg_cpu_utilization += m.cpu_utilization;
                summary.avg_throughput += m.throughput;
                summary.avg_response_time = summary
                    .avg_response_time
                    .zip(m.average_response_time)
                    .map(|(acc, v)| acc + v);
            }

            let Some(cmp) = ScenarioComparison::from_results(&scenario.results) else {
                continue;
            };
            let mut credited: Vec<&str> = Vec::with_capacity(4);
            for winner in [
                &cmp.best_waiting,
                &cmp.best_turnaround,
                &cmp.best_utilization,
                &cmp.best_throughput,
            ] {
                if credited.contains(&winner.algorithm.as_str()) {
                    continue;
                }
                credited.push(&winner.algorithm);
                if let Some(summary) = summaries
                    .iter_mut()
                    .find(|s| s.algorithm == winner.algorithm)
                {
                    summary.wins += 1;
                }
            }
        }

        let count = scenarios.len();
        if count > 0 {
            let n = count as f64;
            for s in &mut summaries {
                s.avg_waiting_time /= n;
                s.avg_turnaround_time /= n;
                s.avg_cpu_utilization /= n;
                s.avg_throughput /= n;
                s.avg_response_time = s.avg_response_time.map(|v| v / n);
            }
        }

        Self {
            summaries,
            scenario_count: count,
        }
    }

    /// Summaries sorted by wins, most first (stable).
    pub fn ranked_by_wins(&self) -> Vec<&AlgorithmSummary> {
        let mut ranked: Vec<&AlgorithmSummary> = self.summaries.iter().collect();
        ranked.sort_by(|a, b| b.wins.cmp(&a.wins));
        ranked
    }

    pub fn best_waiting(&self) -> Option<&AlgorithmSummary> {
        first_best_by(&self.summaries, |s| s.avg_waiting_time, lower)
    }

    pub fn best_turnaround(&self) -> Option<&AlgorithmSummary> {
        first_best_by(&self.summaries, |s| s.avg_turnaround_time, lower)
    }

    pub fn best_utilization(&self) -> Option<&AlgorithmSummary> {
        first_best_by(&self.summaries, |s| s.avg_cpu_utilization, higher)
    }

    pub fn best_throughput(&self) -> Option<&AlgorithmSummary> {
        first_best_by(&self.summaries, |s| s.avg_throughput, higher)
    }

    pub fn most_wins(&self) -> Option<&AlgorithmSummary> {
        self.ranked_by_wins().into_iter().next()
    }

    /// Max-normalized score per algorithm, best first.
    ///
    /// Each metric is scaled against the largest average: waiting and
    /// turnaround as `1 - v / max`, utilization and throughput as `v / max`.
    /// A zero maximum scores 1. The four scores are averaged.
    pub fn overall_scores(&self) -> Vec<(String, f64)> {
        let max_of = |f: fn(&AlgorithmSummary) -> f64| {
            self.summaries.iter().map(f).fold(f64::MIN, f64::max)
        };
        let max_waiting = max_of(|s| s.avg_waiting_time);
        let max_turnaround = max_of(|s| s.avg_turnaround_time);
        let max_util = max_of(|s| s.avg_cpu_utilization);
        let max_throughput = max_of(|s| s.avg_throughput);

        let mut scores: Vec<(String, f64)> = self
            .summaries
            .iter()
            .map(|s| {
                let waiting = if max_waiting > 0.0 {
                    1.0 - s.avg_waiting_time / max_waiting
                } else {
                    1.0
                };
                let turnaround = if max_turnaround > 0.0 {
                    1.0 - s.avg_turnaround_time / max_turnaround
                } else {
                    1.0
                };
                let util = if max_util > 0.0 {
                    s.avg_cpu_utilization / max_util
                } else {
                    1.0
                };
                let throughput = if max_throughput > 0.0 {
                    s.avg_throughput / max_throughput
                } else {
                    1.0
                };
                (s.algorithm.clone(), (waiting + turnaround + util + throughput) / 4.0)
            })
            .collect();
        sort_scores(&mut scores);
        scores
    }
}

/// Best algorithm for one scenario by min-max normalized score.
///
/// Each metric is mapped to 0 (worst) ..= 1 (best) over the result set;
/// a metric with zero range scores 1 for everyone. The four scores are
/// averaged with equal weights. Returns the winner and its score.
pub fn recommend(results: &[SimulationResult]) -> Option<(String, f64)> {
    let range = |f: fn(&SimulationResult) -> f64| {
        let min = results.iter().map(f).fold(f64::MAX, f64::min);
        let max = results.iter().map(f).fold(f64::MIN, f64::max);
        (min, max - min)
    };
    let (min_waiting, waiting_range) = range(|r| r.metrics.average_waiting_time);
    let (min_turnaround, turnaround_range) = range(|r| r.metrics.average_turnaround_time);
    let (min_util, util_range) = range(|r| r.metrics.cpu_utilization);
    let (min_throughput, throughput_range) = range(|r| r.metrics.throughput);

    let normalize = |value: f64, min: f64, range: f64, lower_is_better: bool| {
        if range <= 0.0 {
            return 1.0;
        }
        let scaled = (value - min) / range;
        if lower_is_better {
            1.0 - scaled
        } else {
            scaled
        }
    };

    let mut scores: Vec<(String, f64)> = results
        .iter()
        .map(|r| {
            let m = &r.metrics;
            let score = (normalize(m.average_waiting_time, min_waiting, waiting_range, true)
                + normalize(m.average_turnaround_time, min_turnaround, turnaround_range, true)
                + normalize(m.cpu_utilization, min_util, util_range, false)
                + normalize(m.throughput, min_throughput, throughput_range, false))
                / 4.0;
            (r.algorithm_name.clone(), score)
        })
        .collect();
    sort_scores(&mut scores);
    scores.into_iter().next()
}

fn sort_scores(scores: &mut [(String, f64)]) {
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
}

fn lower(candidate: f64, best: f64) -> bool {
    candidate < best
}

fn higher(candidate: f64, best: f64) -> bool {
    candidate > best
}

/// First item whose key beats every earlier one.
fn first_best_by<T>(
    items: &[T],
    key: impl Fn(&T) -> f64,
    better: fn(f64, f64) -> bool,
) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let value = key(item);
        match best {
            Some((_, current)) if !better(value, current) => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

fn first_best(
    results: &[SimulationResult],
    key: fn(&SimulationResult) -> f64,
    better: fn(f64, f64) -> bool,
) -> Option<MetricWinner> {
    first_best_by(results, key, better).map(|r| MetricWinner {
        algorithm: r.algorithm_name.clone(),
        value: key(r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::SimulationMetrics;

    fn make_result(
        name: &str,
        waiting: f64,
        turnaround: f64,
        util: f64,
        throughput: f64,
    ) -> SimulationResult {
        SimulationResult {
            algorithm_name: name.to_string(),
            timeline: Vec::new(),
            completed_processes: Vec::new(),
            metrics: SimulationMetrics {
                average_waiting_time: waiting,
                average_turnaround_time: turnaround,
                average_response_time: Some(waiting),
                cpu_utilization: util,
                throughput,
                total_time: 10,
                idle_time: 0,
            },
        }
    }

    #[test]
    fn test_scenario_winners() {
        let results = vec![
            make_result("A", 4.0, 9.0, 100.0, 0.2),
            make_result("B", 2.0, 7.0, 90.0, 0.3),
            make_result("C", 2.0, 8.0, 100.0, 0.1),
        ];
        let cmp = ScenarioComparison::from_results(&results).unwrap();
        assert_eq!(cmp.best_waiting.algorithm, "B"); // tie with C → first
        assert_eq!(cmp.best_turnaround.algorithm, "B");
        assert_eq!(cmp.best_utilization.algorithm, "A"); // tie with C → first
        assert_eq!(cmp.best_throughput.algorithm, "B");
        assert!((cmp.best_throughput.value - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_scenario_winners_empty() {
        assert!(ScenarioComparison::from_results(&[]).is_none());
    }

    #[test]
    fn test_overall_averages_and_wins() {
        let scenarios = vec![
            ScenarioResults {
                kind: ScenarioKind::Standard,
                processes: Vec::new(),
                results: vec![
                    make_result("A", 4.0, 9.0, 100.0, 0.2),
                    make_result("B", 2.0, 7.0, 90.0, 0.3),
                ],
            },
            ScenarioResults {
                kind: ScenarioKind::ShortProcesses,
                processes: Vec::new(),
                results: vec![
                    make_result("A", 1.0, 3.0, 100.0, 0.5),
                    make_result("B", 3.0, 5.0, 80.0, 0.4),
                ],
            },
        ];
        let overall = OverallComparison::from_scenarios(&scenarios);
        assert_eq!(overall.scenario_count, 2);

        let a = &overall.summaries[0];
        assert_eq!(a.algorithm, "A");
        assert!((a.avg_waiting_time - 2.5).abs() < 1e-10);
        assert!((a.avg_cpu_utilization - 100.0).abs() < 1e-10);
        assert!((a.avg_response_time.unwrap() - 2.5).abs() < 1e-10);

        // Scenario 1: B wins waiting (+1), turnaround is B again (skip),
        // utilization A (+1), throughput B (already credited).
        // Scenario 2: A sweeps → one win.
        assert_eq!(overall.summaries[0].wins, 2);
        assert_eq!(overall.summaries[1].wins, 1);
        assert_eq!(overall.most_wins().unwrap().algorithm, "A");
        assert_eq!(overall.best_waiting().unwrap().algorithm, "A");
        assert_eq!(overall.best_throughput().unwrap().algorithm, "A");
    }

    #[test]
    fn test_ranked_by_wins_stable() {
        let scenarios = vec![ScenarioResults {
            kind: ScenarioKind::Standard,
            processes: Vec::new(),
            results: vec![
                make_result("A", 1.0, 1.0, 100.0, 1.0),
                make_result("B", 1.0, 1.0, 100.0, 1.0),
            ],
        }];
        let overall = OverallComparison::from_scenarios(&scenarios);
        let ranked: Vec<&str> = overall
            .ranked_by_wins()
            .iter()
            .map(|s| s.algorithm.as_str())
            .collect();
        assert_eq!(ranked, vec!["A", "B"]);
    }

    #[test]
    fn test_recommend_min_max() {
        let results = vec![
            make_result("A", 4.0, 9.0, 100.0, 0.2),
            make_result("B", 2.0, 7.0, 100.0, 0.3),
        ];
        let (name, score) = recommend(&results).unwrap();
        assert_eq!(name, "B");
        // B is best on every metric (utilization ties → 1)
        assert!((score - 1.0).abs() < 1e-10);
        assert!(recommend(&[]).is_none());
    }

    #[test]
    fn test_overall_scores() {
        let scenarios = vec![ScenarioResults {
            kind: ScenarioKind::Standard,
            processes: Vec::new(),
            results: vec![
                make_result("A", 4.0, 8.0, 100.0, 0.2),
                make_result("B", 2.0, 4.0, 50.0, 0.4),
            ],
        }];
        let scores = OverallComparison::from_scenarios(&scenarios).overall_scores();
        // A: (0 + 0 + 1 + 0.5) / 4 = 0.375; B: (0.5 + 0.5 + 0.5 + 1) / 4 = 0.625
        assert_eq!(scores[0].0, "B");
        assert!((scores[0].1 - 0.625).abs() < 1e-10);
        assert!((scores[1].1 - 0.375).abs() < 1e-10);
    }
}
