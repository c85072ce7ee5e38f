//! Shared fixtures for unit and integration tests.  Compiled for tests, or for dependents when the
//! `enable-test-utils` feature is on.

pub mod test_constants;
pub mod test_utilities;
