//! Command implementations for xunit-run

pub mod test;

// Re-export command functions
pub use test::test_command;
