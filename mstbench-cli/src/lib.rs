//! Support library for the mstbench CLI binary.
//!
//! Re-exports the command modules so doctests and integration tests can
//! exercise the generate/run pipeline without forking a subprocess.

pub mod cli;
pub mod input;
pub mod logging;
pub mod report;
