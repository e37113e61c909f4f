//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod issue;
mod model;
mod resolve;

pub use issue::ConfigIssue;
pub use model::{ConfigInt, NickcapsConfigV1, NickcapsFileV1};
pub use resolve::ResolvedConfig;

/// Parse `nickcaps.toml` (or equivalent) and extract the `[nickcaps]` table.
///
/// An empty document, or one without the table, yields all defaults.
pub fn parse_config_toml(input: &str) -> anyhow::Result<NickcapsConfigV1> {
    let file: NickcapsFileV1 = toml::from_str(input)?;
    Ok(file.nickcaps)
}

/// Resolve the effective policy, replacing out-of-range values with defaults.
pub fn resolve_config(cfg: NickcapsConfigV1) -> ResolvedConfig {
    resolve::resolve_config(cfg)
}

/// JSON schema for the config file.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(NickcapsFileV1)
}
