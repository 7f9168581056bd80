//! Core cycle tests.

pub mod execution;
pub mod instruction_source;
