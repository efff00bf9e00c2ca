//! Heat haze CLI library.
//!
//! Command implementations and logging setup for the `heathaze` binary.

pub mod commands;
pub mod logging;
