//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `loading`: Environment and CLI loading tests
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Page selection tests
//! - `page_criteria`: Listing criteria and identifier resolution tests
//! - `viewer`: Access context resolution tests

mod helpers;
