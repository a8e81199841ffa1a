//! Common test utilities for colorstrip.
//!
//! This module provides shared utilities for the integration tests.

// Re-export all common test utilities
pub mod assertions;
pub mod image_utils;
pub mod test_data;
