#[allow(clippy::module_inception)]
pub mod config;
pub mod ai_config;
pub mod editor_config;
pub mod storage_config;
