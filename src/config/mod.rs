//! Configuration helpers for the CLI.

pub mod duration;

pub use duration::parse_duration;
