//! Input validation for process sets.
//!
//! Checks the simulation preconditions before any algorithm runs.
//! Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. Every `arrival_time >= 0`
/// 4. Every `burst_time > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 4, 2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -2, 5)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];

        let errors = validate_processes(&processes).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + negative arrival + zero burst
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(1, -1, 0),
        ];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
