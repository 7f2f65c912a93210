//! Top-level commands

pub mod organize;
