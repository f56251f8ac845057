use crate::config::ProviderConfig;
use crate::error::{AppError, GenerationError};
use crate::providers::{Generation, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, AppError> {
        // Try config first, then fall back to environment variable
        let api_key = config.resolve_api_key().ok_or(AppError::MissingApiKey)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<Generation, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("Google Gemini response ({}): {:?}", status, response_body);

        parse_generation(&response_body, status.is_success())
    }
}

/// Interpret a generateContent response body
fn parse_generation(body: &Value, success: bool) -> Result<Generation, GenerationError> {
    // Check for API error response
    if let Some(error) = body.get("error") {
        return Err(GenerationError::ApiError {
            code: error["code"].as_i64().unwrap_or(0),
            status: error["status"].as_str().unwrap_or("UNKNOWN").to_string(),
            message: error["message"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string(),
            reasons: error["details"]
                .as_array()
                .map(|details| {
                    details
                        .iter()
                        .filter_map(|d| d["reason"].as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        });
    }

    if !success {
        return Err(GenerationError::MalformedResponse(body.to_string()));
    }

    if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
        return Ok(Generation::Blocked(reason.to_string()));
    }

    let candidate = &body["candidates"][0];
    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(Generation::Text(text));
    }

    match candidate["finishReason"].as_str() {
        Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
            Ok(Generation::Blocked(reason.to_string()))
        }
        _ => Ok(Generation::Empty),
    }
}
