use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;

/// A remote text-generation endpoint: one prompt in, one completion out.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;
}
