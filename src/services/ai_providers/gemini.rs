use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::text_generator::TextGenerator;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    rate_limiter: ApiRateLimiter,
}

impl GeminiProvider {
    pub fn new(api_key: String, rate_limiter: ApiRateLimiter) -> Self {
        Self {
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            client: Client::new(),
            model: "gemini-2.0-flash".to_string(),
            temperature: None,
            max_output_tokens: None,
            rate_limiter,
        }
    }

    pub fn from_config(config: &AiConfig, api_key: String) -> Self {
        Self::new(api_key, ApiRateLimiter::new(config.rate_limit_per_minute))
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_generation(config.temperature, config.max_output_tokens)
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_generation(mut self, temperature: f32, max_output_tokens: u32) -> Self {
        self.temperature = Some(temperature);
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        let generation_config = if self.temperature.is_some() || self.max_output_tokens.is_some() {
            Some(GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
                candidate_count: Some(1),
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config,
        }
    }

    fn endpoint_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub(crate) fn map_error_status(status: u16, error_text: String) -> AiProviderError {
        match status {
            400 => AiProviderError::ApiError(format!("Bad request: {error_text}")),
            401 => AiProviderError::AuthenticationError(error_text),
            403 => AiProviderError::ApiError(format!("Forbidden: {error_text}")),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {error_text}")),
            _ => AiProviderError::ApiError(format!("HTTP {status}: {error_text}")),
        }
    }

    pub(crate) fn extract_reply_text(json: &Value) -> Result<String, AiProviderError> {
        if let Some(error) = json.get("error") {
            let error_message = error.get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(AiProviderError::ApiError(error_message.to_string()));
        }

        json
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError> {
        self.rate_limiter.acquire().await;

        log::info!("📦 Request model: {}", self.model);
        let request_body = self.get_request(prompt);

        let response = self.client
            .post(self.endpoint_url())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response: {error_text}");
            return Err(Self::map_error_status(status.as_u16(), error_text));
        }

        let json: Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        Self::extract_reply_text(&json)
    }
}
