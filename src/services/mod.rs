pub mod access_guard;
pub mod ai_providers;
pub mod code_analyzer;
pub mod document_stores;
pub mod local_session_provider;
pub mod rate_limiter;
pub mod response_extractor;
pub mod test_data;
