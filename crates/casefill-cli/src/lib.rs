//! Library surface of the casefill CLI.
//!
//! The binary wires argument parsing and terminal output on top of this;
//! integration tests drive the pipeline through here directly.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
