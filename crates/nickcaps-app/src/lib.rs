//! Use case orchestration for nickcaps.
//!
//! This crate is the layer a host server talks to: it gathers channel and user state through
//! the `HostState` seam, evaluates the current policy, and reloads configuration on request.
//! Evaluation itself lives in `nickcaps-domain`; parsing lives in `nickcaps-settings`.

#![forbid(unsafe_code)]

mod controller;
mod host;

pub use controller::{ModuleInfo, ReloadOutcome, RuleController};
pub use host::{ChannelModeSpec, ConfigSource, HostState, ModeRegistry, TomlFile, TomlText};
