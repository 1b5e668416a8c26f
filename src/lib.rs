//! Code snippet analysis backed by a hosted text-generation endpoint.
//!
//! The core is [`services::response_extractor`], which recovers a structured
//! [`structs::analysis_result::AnalysisResult`] from free-form model output, and
//! [`services::code_analyzer::CodeAnalyzer`], which turns every failure into a
//! renderable fallback record. Identity, storage and generation sit behind the
//! traits in [`traits`] and are injected explicitly.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
