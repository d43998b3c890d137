//! Run/failure counters shared by every test in a run

use std::fmt;

/// Aggregated outcome of one or more test runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestResult {
    run_count: usize,
    error_count: usize,
}

impl TestResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn test_started(&mut self) {
        self.run_count += 1;
    }

    /// Does not require a prior `test_started`.
    pub fn test_failed(&mut self) {
        self.error_count += 1;
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn was_successful(&self) -> bool {
        self.error_count == 0
    }

    /// `"<run> run, <failed> failed"`
    pub fn summary(&self) -> String {
        format!("{} run, {} failed", self.run_count, self.error_count)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} run, {} failed", self.run_count, self.error_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_result_summary() {
        let result = TestResult::new();
        assert_eq!(result.summary(), "0 run, 0 failed");
        assert!(result.was_successful());
    }

    #[test]
    fn test_counts_in_any_order() {
        let mut result = TestResult::new();
        result.test_failed();
        result.test_started();
        result.test_started();
        result.test_started();
        result.test_failed();

        assert_eq!(result.run_count(), 3);
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.summary(), "3 run, 2 failed");
        assert!(!result.was_successful());
    }

    #[test]
    fn test_failed_without_started() {
        let mut result = TestResult::new();
        result.test_failed();
        assert_eq!(result.summary(), "0 run, 1 failed");
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut result = TestResult::new();
        result.test_started();
        result.test_failed();

        let first = result.summary();
        assert_eq!(first, result.summary());
        assert_eq!(first, result.to_string());
    }
}
