use std::sync::Arc;
use crate::enums::supported_language::SupportedLanguage;
use crate::errors::SnippetResult;
use crate::helpers::prompt_generator;
use crate::services::response_extractor;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::text_generator::TextGenerator;

pub struct CodeAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl CodeAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Validates the snippet, then analyzes it. Empty code never reaches the endpoint.
    pub async fn analyze_code(&self, source_code: &str, language: SupportedLanguage) -> SnippetResult<AnalysisResult> {
        let request = AnalysisRequest::new(source_code, language)?;
        Ok(self.analyze(&request).await)
    }

    /// One endpoint call, no retry. Every failure resolves to a fallback record.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let prompt = prompt_generator::generate_analysis_prompt(request.language(), request.source_code());

        log::info!("🔍 Analyzing {} snippet ({} bytes)", request.language(), request.source_code().len());

        let completion = match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("❌ Error analyzing code: {e}");
                return AnalysisResult::endpoint_failure(e.message());
            }
        };

        response_extractor::extract_or_fallback(&completion)
    }

    pub fn print_analysis_report(analysis: &AnalysisResult) {
        println!("🔍 CODE ANALYSIS REPORT");
        println!("======================");
        println!("{}\n", analysis.explanation);
        Self::print_section("💡 SUGGESTIONS", &analysis.suggestions);
        Self::print_section("🚀 IMPROVEMENTS", &analysis.improvements);
        Self::print_section("🔒 SECURITY", &analysis.security);
    }

    fn print_section(title: &str, items: &[String]) {
        println!("{title} ({} total):", items.len());
        for item in items {
            println!("  • {item}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::function;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::traits::text_generator::MockTextGenerator;

    #[tokio::test]
    async fn prompt_carries_language_and_code() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .with(function(|prompt: &String| prompt.contains("```javascript\nconsole.log(1)\n```")))
            .times(1)
            .returning(|_| Ok(r#"{"explanation":"logs","suggestions":[],"improvements":[],"security":[]}"#.to_string()));

        let analyzer = CodeAnalyzer::new(Arc::new(generator));
        let result = analyzer.analyze_code("console.log(1)", SupportedLanguage::JavaScript).await.unwrap();
        assert_eq!(result.explanation, "logs");
    }

    #[tokio::test]
    async fn network_error_message_is_embedded_without_prefix() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(AiProviderError::NetworkError("connection reset".to_string())));

        let analyzer = CodeAnalyzer::new(Arc::new(generator));
        let request = AnalysisRequest::new("x = 1", SupportedLanguage::Python).unwrap();
        let result = analyzer.analyze(&request).await;
        assert_eq!(result.suggestions, vec!["Error analyzing code: connection reset".to_string()]);
        assert!(result.is_error());
    }

    #[tokio::test]
    async fn unparsable_completion_yields_fallback() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok("I cannot help with that.".to_string()));

        let analyzer = CodeAnalyzer::new(Arc::new(generator));
        let request = AnalysisRequest::new("int main() {}", SupportedLanguage::Cpp).unwrap();
        assert_eq!(analyzer.analyze(&request).await, AnalysisResult::unparsable());
    }
}
