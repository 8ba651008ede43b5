//! Batch processing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Pause after each analyzed product, in milliseconds
    #[serde(default = "default_item_delay_ms")]
    pub item_delay_ms: u64,
    /// Largest accepted upload file, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            item_delay_ms: default_item_delay_ms(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl BatchConfig {
    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.item_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("Batch max file size must be greater than 0".to_string());
        }
        Ok(())
    }
}
