//! Simulation utilities and program loading.
//!
//! Provides the collaborators around the core: loading instruction traces,
//! seeding initial state, and running a core to completion.

pub mod loader;
pub mod simulator;

pub use simulator::{RunOutcome, RunSummary, Simulator};
