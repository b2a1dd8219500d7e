//! Scheduling context for selection rule evaluation.

/// Runtime simulation state passed to selection rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulated time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
