//! Plain-text report rendering.
//!
//! Every function returns a `String` so the binary decides where output
//! goes. Orderings are deterministic: inputs are rendered in the order
//! given, charts in value order with stable ties.

use std::fmt::Write;

use super::comparison::{
    recommend, AlgorithmSummary, OverallComparison, ScenarioComparison, ScenarioResults,
};
use crate::models::Process;
use crate::scheduler::SimulationResult;

/// Width of a full bar in characters.
pub const BAR_WIDTH: usize = 40;

const NAME_WIDTH: usize = 24;

/// Renders the input process table.
pub fn render_processes(processes: &[Process]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4} {:>8} {:>6} {:>9}", "ID", "Arrival", "Burst", "Priority");
    for p in processes {
        let _ = writeln!(
            out,
            "{:>4} {:>8} {:>6} {:>9}",
            p.id, p.arrival_time, p.burst_time, p.priority
        );
    }
    out
}

/// Renders one algorithm's metrics, per-process times and timeline.
pub fn render_result(result: &SimulationResult) -> String {
    let m = &result.metrics;
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", result.algorithm_name);
    let _ = writeln!(out, "Average Waiting Time:    {:.2}", m.average_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", m.average_turnaround_time);
    match m.average_response_time {
        Some(v) => {
            let _ = writeln!(out, "Average Response Time:   {v:.2}");
        }
        None => {
            let _ = writeln!(out, "Average Response Time:   n/a");
        }
    }
    let _ = writeln!(out, "CPU Utilization:         {:.2}%", m.cpu_utilization);
    let _ = writeln!(out, "Throughput:              {:.4} processes/unit", m.throughput);

    let _ = writeln!(
        out,
        "\n{:>4} {:>10} {:>8} {:>10} {:>8}",
        "ID", "Completion", "Waiting", "Turnaround", "Response"
    );
    for p in &result.completed_processes {
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>8} {:>10} {:>8}",
            p.id,
            p.completion_time.map_or_else(|| "-".to_string(), |t| t.to_string()),
            p.waiting_time,
            p.turnaround_time,
            p.response_time.map_or_else(|| "-".to_string(), |t| t.to_string()),
        );
    }

    let _ = writeln!(out, "\nTimeline:");
    for event in &result.timeline {
        let _ = writeln!(out, "  {event}");
    }
    out
}

/// Renders a side-by-side metric table for one scenario plus its winners.
pub fn render_comparison(title: &str, results: &[SimulationResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {title} ---");
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>9} {:>11} {:>9} {:>7} {:>10}",
        "Algorithm", "Avg Wait", "Avg Turn", "Avg Resp", "CPU %", "Throughput"
    );
    for r in results {
        let m = &r.metrics;
        let resp = m
            .average_response_time
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:>9.2} {:>11.2} {:>9} {:>7.2} {:>10.4}",
            r.algorithm_name,
            m.average_waiting_time,
            m.average_turnaround_time,
            resp,
            m.cpu_utilization,
            m.throughput
        );
    }

    if let Some(cmp) = ScenarioComparison::from_results(results) {
        let _ = writeln!(
            out,
            "\nBest waiting time:    {} ({:.2})",
            cmp.best_waiting.algorithm, cmp.best_waiting.value
        );
        let _ = writeln!(
            out,
            "Best turnaround time: {} ({:.2})",
            cmp.best_turnaround.algorithm, cmp.best_turnaround.value
        );
        let _ = writeln!(
            out,
            "Best CPU utilization: {} ({:.2}%)",
            cmp.best_utilization.algorithm, cmp.best_utilization.value
        );
        let _ = writeln!(
            out,
            "Best throughput:      {} ({:.4})",
            cmp.best_throughput.algorithm, cmp.best_throughput.value
        );
    }
    if let Some((name, score)) = recommend(results) {
        let _ = writeln!(out, "Recommended:          {name} (score {score:.2})");
    }
    out
}

/// Renders a horizontal bar chart scaled so the largest value spans
/// [`BAR_WIDTH`] characters.
///
/// Items are sorted ascending when `lower_is_better`, descending otherwise.
pub fn render_bar_chart(title: &str, items: &[(String, f64)], lower_is_better: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{title}:");
    let _ = writeln!(out, "{}", "-".repeat(title.len() + 1));

    let max = items.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
    let scale = BAR_WIDTH as f64 / if max > 0.0 { max } else { 1.0 };

    let mut sorted: Vec<&(String, f64)> = items.iter().collect();
    sorted.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal);
        if lower_is_better {
            ord
        } else {
            ord.reverse()
        }
    });

    for (name, value) in sorted {
        let len = (value * scale).max(0.0) as usize;
        let _ = writeln!(out, "{name:<NAME_WIDTH$} | {} {value:.2}", "█".repeat(len));
    }
    out
}

/// Renders the cross-scenario summary: win table, metric charts, overall
/// scores and per-scenario recommendations.
pub fn render_overall(overall: &OverallComparison, scenarios: &[ScenarioResults]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Overall Comparison ({} scenarios) ===", overall.scenario_count);
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>9} {:>11} {:>7} {:>10} {:>5}",
        "Algorithm", "Avg Wait", "Avg Turn", "CPU %", "Throughput", "Wins"
    );
    for s in overall.ranked_by_wins() {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:>9.2} {:>11.2} {:>7.2} {:>10.4} {:>5}",
            s.algorithm,
            s.avg_waiting_time,
            s.avg_turnaround_time,
            s.avg_cpu_utilization,
            s.avg_throughput,
            s.wins
        );
    }

    let series = |f: fn(&AlgorithmSummary) -> f64| -> Vec<(String, f64)> {
        overall
            .summaries
            .iter()
            .map(|s| (s.algorithm.clone(), f(s)))
            .collect()
    };
    let charts: [(&str, fn(&AlgorithmSummary) -> f64, bool); 4] = [
        ("AVERAGE WAITING TIME (lower is better)", |s| s.avg_waiting_time, true),
        ("AVERAGE TURNAROUND TIME (lower is better)", |s| s.avg_turnaround_time, true),
        ("CPU UTILIZATION (higher is better)", |s| s.avg_cpu_utilization, false),
        ("THROUGHPUT (higher is better)", |s| s.avg_throughput, false),
    ];
    for (title, metric, lower_is_better) in charts {
        out.push_str(&render_bar_chart(title, &series(metric), lower_is_better));
    }

    let scores = overall.overall_scores();
    let _ = writeln!(out, "\nOVERALL ALGORITHM PERFORMANCE SCORE:");
    let _ = writeln!(out, "{}", "-".repeat(34));
    for (name, score) in &scores {
        let len = (score * BAR_WIDTH as f64).max(0.0) as usize;
        let _ = writeln!(out, "{name:<NAME_WIDTH$} | {} {score:.2}", "█".repeat(len));
    }

    if !scenarios.is_empty() {
        let _ = writeln!(out, "\nRECOMMENDATIONS BY WORKLOAD:");
        for scenario in scenarios {
            if let Some((name, score)) = recommend(&scenario.results) {
                let _ = writeln!(
                    out,
                    "  {:<22} {name} (score {score:.2}) - {}",
                    scenario.kind.name(),
                    scenario.kind.workload()
                );
            }
        }
    }

    if let Some((name, score)) = scores.first() {
        let _ = writeln!(out, "\nOVERALL RECOMMENDATION: {name} (Score: {score:.2})");
    }
    out
}
