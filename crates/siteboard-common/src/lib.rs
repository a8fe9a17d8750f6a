//! # siteboard-common
//!
//! Shared entry types, error definitions, configuration models, and constants
//! used across the entire Siteboard workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives the client, monitor, and
//! terminal crates build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
