//! Concrete store implementations backing the CLI.

pub mod http;
pub mod local;
