use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::CompanionError;
use crate::media::MediaPart;
use crate::providers::GenerativeProvider;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GeminiProvider {
    /// Create a new Gemini provider from configuration
    ///
    /// The API key comes from the config or the GEMINI_API_KEY environment
    /// variable; without one the provider cannot be constructed at all, so
    /// a missing key is a startup failure rather than a per-request error.
    pub fn new(config: &ProviderConfig) -> Result<Self, CompanionError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                CompanionError::AiService(
                    "GEMINI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(GeminiProvider {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GeminiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 8192,
        }
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
        media: &[MediaPart],
        schema: &Value,
    ) -> Result<String, CompanionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        // Media parts go first, prompt text last, matching the order the
        // prompt refers to them in.
        let mut parts: Vec<Value> = media
            .iter()
            .map(|part| {
                json!({
                    "inlineData": {
                        "data": part.data,
                        "mimeType": part.mime_type
                    }
                })
            })
            .collect();
        parts.push(json!({ "text": prompt }));

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{ "parts": parts }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens,
                    "responseMimeType": "application/json",
                    "responseSchema": schema
                }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CompanionError::AiService(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let raw_text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                CompanionError::AiService(
                    "Failed to extract content from Gemini response".to_string(),
                )
            })?
            .to_string();

        Ok(raw_text)
    }
}
