//! Dropcheck Shared Types
//!
//! This crate contains the domain types shared across the Dropcheck platform.

pub mod types;

pub use types::*;
