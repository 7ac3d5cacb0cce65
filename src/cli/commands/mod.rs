//! Subcommand implementations

pub mod connect;
pub mod puzzle;
