//! Configuration parsing and policy resolution.
//!
//! The file format is a user-facing, permissive TOML model; resolution turns
//! it into the concrete thresholds and rule order the engine consumes, and
//! decides what is mandatory.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{LimitsConfig, LoanguardConfigV1};
pub use resolve::{resolve_config, ConfigError, ResolvedPolicy};

/// Parse `loanguard.toml` contents. Reading the file is the caller's job.
pub fn parse_config_toml(text: &str) -> Result<LoanguardConfigV1, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Parse {
        reason: e.to_string(),
    })
}
