//! Stable DTOs and IDs used across the nickcaps workspace.
//!
//! This crate is intentionally boring:
//! - stable string IDs, mode letters and numerics
//! - the decision returned to the host for each join or rename attempt

#![forbid(unsafe_code)]

pub mod decision;
pub mod ids;

pub use decision::{Decision, Denial, Trigger};
