use super::ImageAnalyzer;
use super::prompt::ANALYSIS_PROMPT;
use super::response::parse_analysis;
use crate::config::VisionConfig;
use crate::core::models::AnalysisResult;
use crate::storage::ImageStore;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible vision client
#[derive(Debug, Clone)]
pub struct VisionClient {
    client: Client,
    config: VisionConfig,
    images: Arc<ImageStore>,
}

impl VisionClient {
    pub fn new(config: VisionConfig, images: Arc<ImageStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(CatalogError::HttpClient)?;

        if config.api_key().is_none() {
            warn!("Vision client created without an API key");
        }

        Ok(Self {
            client,
            config,
            images,
        })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Analyze a product, surfacing every failure
    pub async fn try_analyze(&self, product_id: &str, filenames: &[String]) -> Result<AnalysisResult> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| CatalogError::External("Vision API key is not configured".to_string()))?;

        if filenames.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Product {} has no images",
                product_id
            )));
        }

        let body = self.build_request(filenames).await?;
        debug!(product_id, images = filenames.len(), "Sending vision request");

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::timeout(format!("Vision request timed out: {}", e))
                } else {
                    CatalogError::HttpClient(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CatalogError::External(format!(
                "Vision API returned {}: {}",
                status, text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::parsing(format!("Invalid completion response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CatalogError::Parsing("Completion has no content".to_string()))?;

        let result = parse_analysis(&content)?;
        info!(product_id, level = %result.level, titles = result.titles.len(), "Product analyzed");
        Ok(result)
    }

    /// Chat completions body: the prompt followed by one data URL per image
    async fn build_request(&self, filenames: &[String]) -> Result<Value> {
        let mut content = vec![json!({ "type": "text", "text": ANALYSIS_PROMPT })];

        for filename in filenames {
            let bytes = self.images.read(filename).await?;
            let data_url = format!(
                "data:{};base64,{}",
                ImageStore::content_type(filename),
                general_purpose::STANDARD.encode(&bytes)
            );
            content.push(json!({
                "type": "image_url",
                "image_url": { "url": data_url }
            }));
        }

        Ok(json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": content }],
            "response_format": { "type": "json_object" },
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        }))
    }
}

#[async_trait]
impl ImageAnalyzer for VisionClient {
    async fn analyze(&self, product_id: &str, filenames: &[String]) -> AnalysisResult {
        match self.try_analyze(product_id, filenames).await {
            Ok(result) => result,
            Err(e) => {
                warn!(product_id, error = %e, "Vision analysis failed, using fallback result");
                AnalysisResult::fallback()
            }
        }
    }
}
