//! coax Test Kit - Conformance testing utilities.
//!
//! This crate checks that both coax API surfaces produce the same results
//! and that every `can_*` predicate agrees with its conversion.
//!
//! # Key Types
//!
//! - [`Literal`]: Owned, serializable description of a dynamic value
//! - [`Case`]: One input, policy, target and expected outcome
//! - [`CoercionRunner`]: Trait for running a coercion through one API surface
//! - [`Scenario`]: A named table of cases, loadable from JSON
//!
//! # Available Runners
//!
//! | Runner | Description |
//! |--------|-------------|
//! | `CoreRunner` | Baseline - calls the `Result` API directly |
//! | `MustRunner` | Calls `must::*` and recovers panics with `maybe` |
//!
//! # Example
//!
//! ```
//! use coax_testkit::{check_agreement, Literal};
//!
//! let input = Literal::Str("42".into());
//! assert!(check_agreement(&input.value()).is_empty());
//! ```

pub mod corpus;
mod runner;
mod scenario;
mod table;

pub use corpus::{Literal, Marshal, NamedValue};
pub use runner::{
    agreement_options, check_agreement, predicate, run_conformance_test, CoercionRunner,
    ConformanceResult, CoreRunner, Disagreement, MustRunner, RunResult,
};
pub use scenario::{standard, Scenario, ScenarioBuilder, ScenarioError};
pub use table::{Case, Expect, Output};

/// Re-export coax_core for convenience in tests.
pub use coax_core;
