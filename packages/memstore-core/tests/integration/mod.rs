//! Integration test suite.
//!
//! 1. End-to-end query scenarios
//! 2. Layout equivalence on randomized data
//! 3. Index and aggregate invariants under random writes
//! 4. Loader and configuration from files

pub mod helpers;
pub mod invariant_tests;
pub mod layout_equivalence_tests;
pub mod loader_tests;
pub mod scenario_tests;
