pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        "gemini-2.0-flash".to_string()
    }

    pub fn default_api_key_env() -> String {
        "GEMINI_API_KEY".to_string()
    }

    pub fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }

    pub const fn default_rate_limit_per_minute() -> u32 {
        15
    }

    pub const fn default_temperature() -> f32 {
        1.0
    }

    pub const fn default_max_output_tokens() -> u32 {
        8192
    }

    pub fn default_language() -> String {
        "python".to_string()
    }
}
