//! Core tests.

pub mod cpu;
