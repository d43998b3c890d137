//! Test command implementation
//!
//! Runs the framework's self-test suite against a fresh result and prints
//! the summary line.

use anyhow::{Context, Result};
use colored::*;
use tracing::debug;
use xunit::{self_test::self_test_suite, Test, TestResult};

/// Run the self-test suite. Returns the finished result.
pub fn test_command(color: bool) -> Result<TestResult> {
    let mut suite = self_test_suite();
    debug!(cases = suite.count_test_cases(), "running self-test suite");

    let mut result = TestResult::new();
    suite
        .run(&mut result)
        .context("Test suite aborted")?;

    println!("{}", render_summary(&result, color));

    Ok(result)
}

fn render_summary(result: &TestResult, color: bool) -> String {
    let summary = result.summary();

    if !color {
        summary
    } else if result.was_successful() {
        summary.green().bold().to_string()
    } else {
        summary.red().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_summary_is_untouched() {
        let mut result = TestResult::new();
        result.test_started();
        result.test_started();
        result.test_failed();

        assert_eq!(render_summary(&result, false), "2 run, 1 failed");
    }

    #[test]
    fn test_colored_summary_keeps_text() {
        colored::control::set_override(true);
        let mut result = TestResult::new();
        result.test_started();

        let rendered = render_summary(&result, true);
        assert!(rendered.contains("1 run, 0 failed"));
        assert_ne!(rendered, "1 run, 0 failed");
    }

    #[test]
    fn test_command_runs_self_tests() {
        let result = test_command(false).unwrap();
        assert_eq!(result.summary(), "10 run, 0 failed");
    }
}
