//! Test discovery module
//!
//! Fixtures register their methods explicitly through
//! [`TestFixture::methods`]. Discovery is the registered names minus the
//! members every test case already has.

use std::collections::BTreeSet;
use tracing::trace;
use crate::error::{Result, XUnitError};
use crate::test_case::{Fixture, TestFixture, TestMethod};

/// Member names provided by the framework itself
pub const BASE_MEMBERS: &[&str] = &["name", "run", "set_up", "tear_down"];

/// Build a fixture's method table from method names.
///
/// ```
/// use xunit::{test_methods, Fixture, TestFixture, TestMethod};
///
/// #[derive(Default)]
/// struct Arithmetic;
///
/// impl Fixture for Arithmetic {}
///
/// impl Arithmetic {
///     fn test_add(&mut self) -> anyhow::Result<()> {
///         anyhow::ensure!(1 + 1 == 2);
///         Ok(())
///     }
/// }
///
/// impl TestFixture for Arithmetic {
///     fn methods() -> Vec<(&'static str, TestMethod<Self>)> {
///         test_methods!(Self => test_add)
///     }
/// }
///
/// assert_eq!(Arithmetic::methods()[0].0, "test_add");
/// ```
#[macro_export]
macro_rules! test_methods {
    ($fixture:ty => $($method:ident),* $(,)?) => {
        vec![$(
            (stringify!($method), <$fixture>::$method as $crate::TestMethod<$fixture>)
        ),*]
    };
}

/// Names of the test methods on `F`.
///
/// Any registered helper that is not a base member is included.
pub fn test_method_names<F: TestFixture>() -> BTreeSet<&'static str> {
    let fixture_members: BTreeSet<&'static str> = F::methods()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let base_members: BTreeSet<&'static str> = BASE_MEMBERS.iter().copied().collect();

    let names: BTreeSet<&'static str> = fixture_members
        .difference(&base_members)
        .copied()
        .collect();

    trace!(count = names.len(), "discovered test methods");
    names
}

/// Resolve `name` to a callable on `F`: registered methods first, then the hooks.
pub fn find_method<F: TestFixture>(name: &str) -> Result<TestMethod<F>> {
    if let Some((_, method)) = F::methods().into_iter().find(|(n, _)| *n == name) {
        return Ok(method);
    }

    match name {
        "set_up" => Ok(<F as Fixture>::set_up as TestMethod<F>),
        "tear_down" => Ok(<F as Fixture>::tear_down as TestMethod<F>),
        _ => Err(XUnitError::unknown_method(name)),
    }
}
