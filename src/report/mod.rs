//! Cross-algorithm comparison and text reports.
//!
//! [`ScenarioComparison`] picks per-metric winners within one scenario,
//! [`OverallComparison`] aggregates across scenarios, and the `render_*`
//! functions format both for the terminal.

mod comparison;
mod render;

pub use comparison::{
    recommend, AlgorithmSummary, MetricWinner, OverallComparison, ScenarioComparison,
    ScenarioResults,
};
pub use render::{
    render_bar_chart, render_comparison, render_overall, render_processes, render_result,
    BAR_WIDTH,
};
