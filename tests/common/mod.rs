//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{FirstOrderRelease, SquareRootRelease};
pub use test_helpers::{assert_profiles_close, higuchi_general, relative_error};
