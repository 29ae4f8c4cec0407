//! Errors for the fallible edges of the crate
//!
//! Scanning itself never fails: missing world data, unknown rooms and
//! unresolved rotations are represented as data. Only loading a catalog or a
//! config from text can go wrong.

use thiserror::Error;

/// Problems loading a room catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not parse room catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read room catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("core {core} is claimed by both '{first}' and '{second}'")]
    DuplicateCore {
        core: i32,
        first: String,
        second: String,
    },

    #[error("catalog entry #{index} has an empty name")]
    EmptyName { index: usize },
}

/// Problems loading a scan configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse scan config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rescan interval must be at least 1 tick, got {0}")]
    InvalidInterval(u32),
}
