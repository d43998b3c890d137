//! Test suites: ordered collections of runnables

use tracing::debug;
use crate::error::Result;
use crate::test_case::{Test, TestCase, TestFixture};
use crate::test_discovery::test_method_names;
use crate::test_result::TestResult;

/// Test suite
#[derive(Default)]
pub struct TestSuite {
    tests: Vec<Box<dyn Test>>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// One case per test method discovered on `F`.
    pub fn from_fixture<F: TestFixture>() -> Self {
        let mut suite = Self::new();

        for name in test_method_names::<F>() {
            suite.add(TestCase::<F>::new(name));
        }

        suite
    }

    pub fn add(&mut self, test: impl Test + 'static) {
        self.tests.push(Box::new(test));
    }

    /// Direct children, not leaf cases.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl Test for TestSuite {
    /// Runs children in insertion order. A `tear_down` failure stops the suite.
    fn run(&mut self, result: &mut TestResult) -> Result<()> {
        debug!(tests = self.tests.len(), "running suite");

        for test in &mut self.tests {
            test.run(result)?;
        }

        Ok(())
    }

    fn count_test_cases(&self) -> usize {
        self.tests.iter().map(|test| test.count_test_cases()).sum()
    }
}
