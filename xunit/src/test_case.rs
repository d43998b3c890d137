//! Test cases and the fixture protocol
//!
//! A [`TestCase`] binds a method name to a fresh fixture instance and drives
//! the `set_up` → body → `tear_down` sequence, reporting into a shared
//! [`TestResult`]. Failures from `set_up` or the body (an `Err` or a panic)
//! are recorded and swallowed; failures from `tear_down` are not.

use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, trace};
use crate::error::{Result, XUnitError};
use crate::test_discovery::find_method;
use crate::test_result::TestResult;

/// Zero-argument behaviour registered on a fixture
pub type TestMethod<F> = fn(&mut F) -> anyhow::Result<()>;

/// Setup/teardown hooks. Both default to doing nothing.
pub trait Fixture {
    fn set_up(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn tear_down(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A test-bearing type: fixture hooks plus an explicit table of named methods.
///
/// Every registered name that is not a base member (see
/// [`BASE_MEMBERS`](crate::test_discovery::BASE_MEMBERS)) is treated as a
/// test method by [`TestSuite::from_fixture`](crate::TestSuite::from_fixture),
/// helpers included.
pub trait TestFixture: Fixture + Default + 'static {
    fn methods() -> Vec<(&'static str, TestMethod<Self>)>;
}

/// Anything that can be run against a [`TestResult`]
pub trait Test {
    /// Only a `tear_down` failure is reported as `Err`.
    fn run(&mut self, result: &mut TestResult) -> Result<()>;

    fn count_test_cases(&self) -> usize;
}

/// One test: a method name and the fixture it runs on
#[derive(Debug)]
pub struct TestCase<F> {
    name: String,
    fixture: F,
}

impl<F: TestFixture> TestCase<F> {
    /// The name is resolved against `F::methods()` when the case runs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture: F::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixture(&self) -> &F {
        &self.fixture
    }

    fn set_up_and_invoke(&mut self) -> anyhow::Result<()> {
        let name = self.name.as_str();
        let fixture = &mut self.fixture;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> anyhow::Result<()> {
            fixture.set_up()?;
            trace!(test = name, "set_up done");
            let method = find_method::<F>(name)?;
            method(fixture)
        }));

        match outcome {
            Ok(result) => result,
            Err(payload) => Err(XUnitError::panicked(&*payload).into()),
        }
    }
}

impl<F: TestFixture> Test for TestCase<F> {
    fn run(&mut self, result: &mut TestResult) -> Result<()> {
        result.test_started();
        debug!(test = %self.name, "running test case");

        if let Err(err) = self.set_up_and_invoke() {
            debug!(test = %self.name, error = %format!("{:#}", err), "test case failed");
            result.test_failed();
        }

        // Not guarded: a panic here unwinds to the caller.
        if let Err(err) = self.fixture.tear_down() {
            debug!(test = %self.name, error = %format!("{:#}", err), "tear_down failed");
            return Err(XUnitError::tear_down(&self.name, &err));
        }

        Ok(())
    }

    fn count_test_cases(&self) -> usize {
        1
    }
}
