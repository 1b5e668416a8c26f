use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DATA_DIR_NAME, SESSION_FILE_NAME, SUPPORTED_PROVIDERS};
use crate::enums::supported_language::SupportedLanguage;
use crate::errors::{SnippetError, SnippetResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn app_dir() -> SnippetResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or_else(|| SnippetError::config_error("Could not determine the home directory", None, Some("Set the HOME environment variable")))
    }

    pub fn config_path() -> SnippetResult<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn session_path() -> SnippetResult<PathBuf> {
        Ok(Self::app_dir()?.join(SESSION_FILE_NAME))
    }

    pub fn load() -> SnippetResult<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SnippetResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SnippetError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| SnippetError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    pub fn create_sample_config() -> SnippetResult<PathBuf> {
        let config_file_path = Self::config_path()?;
        Self::write_sample_config(&config_file_path)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn write_sample_config(path: &Path) -> SnippetResult<()> {
        if path.exists() {
            return Err(SnippetError::file_error(&path.display().to_string(), "create config", "file already exists"));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let sample_config = format!(
            "# Snippet Analyzer configuration\n\n{}",
            toml::to_string_pretty(&Config::default())?
        );
        fs::write(path, sample_config)?;
        Ok(())
    }

    /// Root for the document store, expanding a leading `~/`.
    pub fn data_dir(config: &Config) -> SnippetResult<PathBuf> {
        match config.storage.data_dir.as_deref() {
            Some(dir) => match dir.strip_prefix("~/") {
                Some(rest) => dirs::home_dir()
                    .map(|home| home.join(rest))
                    .ok_or_else(|| SnippetError::config_error("Could not determine the home directory", Some("storage.data_dir"), None)),
                None => Ok(PathBuf::from(dir)),
            },
            None => Ok(Self::app_dir()?.join(DATA_DIR_NAME)),
        }
    }

    pub fn api_key(config: &AiConfig) -> SnippetResult<String> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SnippetError::config_error(
                &format!("Gemini API key is not configured ({} is not set)", config.api_key_env),
                Some("ai.api_key_env"),
                Some(format!("export {}=<your key>", config.api_key_env).as_str()),
            )),
        }
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(format!("Unsupported AI provider: {}", config.ai.provider));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model must not be empty".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if config.ai.rate_limit_per_minute == 0 {
            errors.push("ai.rate_limit_per_minute must be greater than zero".to_string());
        }

        if config.editor.default_language.parse::<SupportedLanguage>().is_err() {
            errors.push(format!("Unknown default language: {}", config.editor.default_language));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
