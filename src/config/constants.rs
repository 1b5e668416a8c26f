pub const APP_DIR_NAME: &str = "snippet-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const DATA_DIR_NAME: &str = "data";
pub const SUPPORTED_PROVIDERS: &[&str] = &["gemini"];
