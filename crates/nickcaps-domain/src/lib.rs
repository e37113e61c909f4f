//! Pure policy evaluation (no IO).
//!
//! Input: a policy resolved elsewhere plus a snapshot of the channels involved.
//! Output: a `Decision` for one join or rename attempt.

#![forbid(unsafe_code)]

pub mod classifier;
pub mod model;
pub mod policy;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use classifier::CapsMap;
pub use engine::{evaluate_join, evaluate_rename, join_reason, rename_reason};
pub use policy::NickcapsPolicy;
