pub mod ai_provider_error;
pub mod commands;
pub mod extraction_error;
pub mod supported_language;
