//! Scan configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tunables for a scan session
///
/// Whether scanning runs at all is the host's decision; this only shapes how
/// a running session behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Ticks between incremental sweeps of unresolved cells
    pub rescan_interval: u32,
    /// Resolve room rotation after placing a room
    pub detect_rotation: bool,
    /// Classify passages after each sweep
    pub classify_doors: bool,
    /// Run the same-name merge pass after each sweep
    pub merge_pass: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rescan_interval: 10,
            detect_rotation: true,
            classify_doors: true,
            merge_pass: true,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rescan_interval == 0 {
            return Err(ConfigError::InvalidInterval(self.rescan_interval));
        }
        Ok(())
    }

    /// Parse and validate; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
