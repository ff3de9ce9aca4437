//! Test utilities
//!
//! Manual mock implementations and fixtures for unit testing.
//!
//! Why manual mocks instead of a mocking crate?
//! - The controller tests need a fetch that can be held in flight (gated)
//!   to exercise the loading-flag and stale-response guarantees; that is
//!   awkward to express through macro-generated mocks.
//! - Manual mocks are explicit and easy to debug.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
