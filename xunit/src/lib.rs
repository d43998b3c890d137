//! Minimal xUnit-style test framework
//!
//! Fixtures register their test methods, suites collect cases, and every run
//! reports into one [`TestResult`] whose summary reads `"N run, M failed"`.

pub mod error;
pub mod test_case;
pub mod test_discovery;
pub mod test_result;
pub mod test_suite;

pub use error::{Result, XUnitError};
pub use test_case::{Fixture, Test, TestCase, TestFixture, TestMethod};
pub use test_discovery::{find_method, test_method_names, BASE_MEMBERS};
pub use test_result::TestResult;
pub use test_suite::TestSuite;
