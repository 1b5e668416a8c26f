pub mod ai;
pub mod analysis_request;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod user_identity;
