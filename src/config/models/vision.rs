//! Vision model configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings for the OpenAI-compatible vision endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// API key; analysis degrades to fallback results when unset
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL, without the trailing `/chat/completions`
    #[serde(default = "default_vision_api_base")]
    pub api_base: String,
    #[serde(default = "default_vision_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_vision_timeout")]
    pub timeout: u64,
    #[serde(default = "default_vision_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_vision_temperature")]
    pub temperature: f32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_vision_api_base(),
            model: default_vision_model(),
            timeout: default_vision_timeout(),
            max_tokens: default_vision_max_tokens(),
            temperature: default_vision_temperature(),
        }
    }
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl VisionConfig {
    /// The configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Full chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(format!("Invalid vision API base URL: {}", self.api_base));
        }

        if self.model.trim().is_empty() {
            return Err("Vision model cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Vision timeout must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Vision temperature must be between 0.0 and 2.0".to_string());
        }

        Ok(())
    }
}
