//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    CommonConfig, GrammarConfig, GramguardConfigV1, HeaderConfig, SystemClassConfig,
};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `gramguard.toml` (or equivalent) into a typed model. Unknown keys are rejected.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GramguardConfigV1> {
    let cfg: GramguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Validate the config, apply overrides, and build the immutable domain policy.
pub fn resolve_config(
    cfg: GramguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
