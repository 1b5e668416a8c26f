use crate::enums::supported_language::SupportedLanguage;
use crate::prompts::code_analysis_prompt::RESPONSE_SCHEMA;

pub fn generate_analysis_prompt(language: SupportedLanguage, source_code: &str) -> String {
    format!(
        "Analyze the following {language} code and provide a response in JSON format only \
         (no additional text or markdown) with the following structure:\n\
         {RESPONSE_SCHEMA}\n\n\
         Code to analyze:\n\
         ```{language}\n\
         {source_code}\n\
         ```"
    )
}
