//! Command implementations for Stager CLI

pub mod completions;
pub mod deploy;
pub mod version;
