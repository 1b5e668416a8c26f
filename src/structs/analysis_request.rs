use crate::enums::supported_language::SupportedLanguage;
use crate::errors::{SnippetError, SnippetResult};

/// One analysis invocation. Construction is the only place code is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    source_code: String,
    language: SupportedLanguage,
}

impl AnalysisRequest {
    pub fn new(source_code: impl Into<String>, language: SupportedLanguage) -> SnippetResult<Self> {
        let source_code = source_code.into();
        if source_code.trim().is_empty() {
            return Err(SnippetError::validation_error(
                "source_code",
                "",
                "must not be empty",
                Some("Please enter some code to analyze"),
            ));
        }

        Ok(Self { source_code, language })
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_code() {
        assert!(AnalysisRequest::new("", SupportedLanguage::Python).is_err());
        assert!(AnalysisRequest::new("   \n\t", SupportedLanguage::Cpp).is_err());
    }

    #[test]
    fn keeps_code_verbatim() {
        let request = AnalysisRequest::new("  print(1)\n", SupportedLanguage::Python).unwrap();
        assert_eq!(request.source_code(), "  print(1)\n");
        assert_eq!(request.language(), SupportedLanguage::Python);
    }
}
