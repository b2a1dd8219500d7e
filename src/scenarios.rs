//! Workload scenario generation.
//!
//! One fixed hand-built case plus five seeded random families. A single
//! RNG is shared across scenarios and consumed in generation order, so one
//! seed reproduces an entire comparison run.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Default seed for reproducible runs.
pub const DEFAULT_SEED: u64 = 42;

/// Scenario families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Fixed five-process textbook case.
    Standard,
    /// Ten short jobs arriving one per tick.
    ShortProcesses,
    /// Five long jobs arriving every two ticks.
    LongProcesses,
    /// Short, medium and long jobs at random arrivals.
    MixedProcesses,
    /// Five jobs all arriving at t=0.
    SimultaneousArrival,
    /// Eight jobs with strictly increasing priority values.
    PriorityVariation,
}

impl ScenarioKind {
    /// All scenario families in canonical order.
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::Standard,
        ScenarioKind::ShortProcesses,
        ScenarioKind::LongProcesses,
        ScenarioKind::MixedProcesses,
        ScenarioKind::SimultaneousArrival,
        ScenarioKind::PriorityVariation,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Standard => "Standard Case",
            ScenarioKind::ShortProcesses => "Short Processes",
            ScenarioKind::LongProcesses => "Long Processes",
            ScenarioKind::MixedProcesses => "Mixed Processes",
            ScenarioKind::SimultaneousArrival => "Simultaneous Arrival",
            ScenarioKind::PriorityVariation => "Priority Variation",
        }
    }

    /// Workload description used in recommendations.
    pub fn workload(&self) -> &'static str {
        match self {
            ScenarioKind::Standard => "a typical mixed textbook workload",
            ScenarioKind::ShortProcesses => "many short processes",
            ScenarioKind::LongProcesses => "few long processes",
            ScenarioKind::MixedProcesses => "mixed process lengths",
            ScenarioKind::SimultaneousArrival => "processes arriving simultaneously",
            ScenarioKind::PriorityVariation => "widely varying priorities",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ScenarioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(ScenarioKind::Standard),
            "short" | "short_processes" => Ok(ScenarioKind::ShortProcesses),
            "long" | "long_processes" => Ok(ScenarioKind::LongProcesses),
            "mixed" | "mixed_processes" => Ok(ScenarioKind::MixedProcesses),
            "simultaneous" | "simultaneous_arrival" => Ok(ScenarioKind::SimultaneousArrival),
            "priority" | "priority_variation" => Ok(ScenarioKind::PriorityVariation),
            other => Err(format!("unknown scenario '{other}'")),
        }
    }
}

/// A named process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario family.
    pub kind: ScenarioKind,
    /// Input processes.
    pub processes: Vec<Process>,
}

impl Scenario {
    /// Display name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Seeded scenario generator.
///
/// # Example
/// ```
/// use cpu_sched_sim::scenarios::{ScenarioGenerator, ScenarioKind};
///
/// let mut gen = ScenarioGenerator::new(42);
/// let standard = gen.generate(ScenarioKind::Standard);
/// assert_eq!(standard.processes.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    rng: StdRng,
}

impl ScenarioGenerator {
    /// Creates a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates one scenario.
    pub fn generate(&mut self, kind: ScenarioKind) -> Scenario {
        match kind {
            ScenarioKind::Standard => Self::standard(),
            ScenarioKind::ShortProcesses => self.short_processes(),
            ScenarioKind::LongProcesses => self.long_processes(),
            ScenarioKind::MixedProcesses => self.mixed_processes(),
            ScenarioKind::SimultaneousArrival => self.simultaneous_arrival(),
            ScenarioKind::PriorityVariation => self.priority_variation(),
        }
    }

    /// Generates the given scenarios in order.
    pub fn generate_many(&mut self, kinds: &[ScenarioKind]) -> Vec<Scenario> {
        kinds.iter().map(|&k| self.generate(k)).collect()
    }

    /// Generates every scenario in canonical order.
    pub fn generate_all(&mut self) -> Vec<Scenario> {
        self.generate_many(&ScenarioKind::ALL)
    }

    /// Fixed case: (id, arrival, burst, priority).
    pub fn standard() -> Scenario {
        let rows: [(ProcessId, i64, i64, i32); 5] = [
            (1, 0, 7, 2),
            (2, 2, 4, 1),
            (3, 4, 1, 3),
            (4, 5, 4, 2),
            (5, 8, 2, 1),
        ];
        Scenario {
            kind: ScenarioKind::Standard,
            processes: rows
                .iter()
                .map(|&(id, arrival, burst, priority)| {
                    Process::new(id, arrival, burst).with_priority(priority)
                })
                .collect(),
        }
    }

    /// Ten processes, arrival `i - 1`, burst 1..=2.
    pub fn short_processes(&mut self) -> Scenario {
        let processes = (1..=10)
            .map(|i| {
                let burst = self.rng.random_range(1..3);
                let priority = self.random_priority();
                Process::new(i, i as i64 - 1, burst).with_priority(priority)
            })
            .collect();
        Scenario {
            kind: ScenarioKind::ShortProcesses,
            processes,
        }
    }

    /// Five processes, arrival `2i`, burst 10..=19.
    pub fn long_processes(&mut self) -> Scenario {
        let processes = (1..=5)
            .map(|i| {
                let burst = self.rng.random_range(10..20);
                let priority = self.random_priority();
                Process::new(i, i as i64 * 2, burst).with_priority(priority)
            })
            .collect();
        Scenario {
            kind: ScenarioKind::LongProcesses,
            processes,
        }
    }

    /// Eight processes: three short, three medium, two long, random arrivals.
    ///
    /// Returned sorted (stably) by arrival.
    pub fn mixed_processes(&mut self) -> Scenario {
        let mut processes: Vec<Process> = (1..=8)
            .map(|i| {
                let burst = match i {
                    1..=3 => self.rng.random_range(1..4),
                    4..=6 => self.rng.random_range(5..10),
                    _ => self.rng.random_range(11..15),
                };
                let arrival = self.rng.random_range(0..10);
                let priority = self.random_priority();
                Process::new(i, arrival, burst).with_priority(priority)
            })
            .collect();
        processes.sort_by_key(|p| p.arrival_time);
        Scenario {
            kind: ScenarioKind::MixedProcesses,
            processes,
        }
    }

    /// Five processes at t=0, burst 1..=9.
    pub fn simultaneous_arrival(&mut self) -> Scenario {
        let processes = (1..=5)
            .map(|i| {
                let burst = self.rng.random_range(1..10);
                let priority = self.random_priority();
                Process::new(i, 0, burst).with_priority(priority)
            })
            .collect();
        Scenario {
            kind: ScenarioKind::SimultaneousArrival,
            processes,
        }
    }

    /// Eight processes, arrival `i`, burst 3..=7, priority `i`.
    pub fn priority_variation(&mut self) -> Scenario {
        let processes = (1..=8)
            .map(|i| {
                let burst = self.rng.random_range(3..8);
                Process::new(i, i as i64, burst).with_priority(i as i32)
            })
            .collect();
        Scenario {
            kind: ScenarioKind::PriorityVariation,
            processes,
        }
    }

    fn random_priority(&mut self) -> i32 {
        self.rng.random_range(1..5)
    }
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
