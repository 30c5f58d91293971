//! Integration tests for pythagoras.
//!
//! These tests exercise the public library API and the built binary.

pub mod cli_tests;
pub mod output_tests;
pub mod property_tests;
pub mod render_tests;
