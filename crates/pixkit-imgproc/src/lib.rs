#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Per-channel operations: copy, shift and range clamping.
pub mod channel;

/// Color transformations module.
pub mod color;

/// Module containing parallelization utilities.
pub mod parallel;
