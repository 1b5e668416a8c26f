use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::{Commands, TestDataAction};
use crate::enums::supported_language::SupportedLanguage;
use crate::errors::{SnippetError, SnippetResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::access_guard::AccessGuard;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::document_stores::file_document_store::FileDocumentStore;
use crate::services::local_session_provider::LocalSessionProvider;
use crate::services::test_data;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::user_identity::{SignInRequest, UserIdentity};
use crate::traits::document_store::DocumentStore;
use crate::traits::identity_provider::IdentityProvider;

pub struct CommandRunner {
    config: Config,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
    guard: AccessGuard,
}

impl CommandRunner {
    pub fn new(config: Config, identity: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        let guard = AccessGuard::new(Arc::clone(&identity));
        Self {
            config,
            identity,
            store,
            guard,
        }
    }

    /// Wires the local session and file-backed store from the user's config.
    pub async fn from_environment() -> SnippetResult<Self> {
        let config = ConfigManager::load()?;
        let identity = LocalSessionProvider::open(ConfigManager::session_path()?).await?;
        let store = FileDocumentStore::new(ConfigManager::data_dir(&config)?);
        Ok(Self::new(config, Arc::new(identity), Arc::new(store)))
    }

    pub async fn run_command(&self, command: Commands) -> SnippetResult<()> {
        let start = Instant::now();

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Login { email, name, photo } => self.login_command(email, name, photo).await,
            Commands::Logout => self.logout_command().await,
            Commands::Whoami => self.guard.run("view your profile", |user| async move {
                Self::print_profile(&user);
                Ok(())
            }).await,
            Commands::Languages => {
                Self::languages_command();
                Ok(())
            }
            Commands::Template { language } => Self::template_command(&language),
            Commands::Analyze { file, code, language } => {
                self.guard.run("analyze code", |_| self.analyze_command(file, code, language)).await
            }
            Commands::TestData { action } => {
                self.guard.run("manage test data", |user| self.test_data_command(user, action)).await
            }
            Commands::Validate => self.validate_command(),
        };

        log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        result
    }

    fn init_command() -> SnippetResult<()> {
        log::info!("🚀 Initializing snippet-analyzer configuration...");
        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to change the model or storage location.", path.display());
        log::info!("🔧 Run 'snippet-analyzer validate' to check your configuration.");
        Ok(())
    }

    async fn login_command(&self, email: String, name: Option<String>, photo: Option<String>) -> SnippetResult<()> {
        let user = self.identity.sign_in(SignInRequest {
            email,
            display_name: name,
            photo_url: photo,
        }).await?;

        log::info!("✅ Signed in as {}", user.email);
        Ok(())
    }

    async fn logout_command(&self) -> SnippetResult<()> {
        self.identity.sign_out().await?;
        log::info!("👋 Signed out");
        Ok(())
    }

    fn print_profile(user: &UserIdentity) {
        println!("👤 {}", user.display_name.as_deref().unwrap_or(&user.email));
        println!("   Email:        {}", user.email);
        println!("   User ID:      {}", user.uid);
        if let Some(photo) = &user.photo_url {
            println!("   Photo:        {photo}");
        }
        println!("   Created:      {}", user.created_at.format("%Y-%m-%d"));
        println!("   Last sign-in: {}", user.last_sign_in_at.format("%Y-%m-%d"));
    }

    fn languages_command() {
        for language in SupportedLanguage::ALL {
            println!("{language}");
        }
    }

    fn template_command(language: &str) -> SnippetResult<()> {
        let language: SupportedLanguage = language.parse()?;
        println!("{}", language.template());
        Ok(())
    }

    fn resolve_language(&self, language: Option<String>) -> SnippetResult<SupportedLanguage> {
        language
            .as_deref()
            .unwrap_or(&self.config.editor.default_language)
            .parse()
    }

    async fn read_source(file: Option<PathBuf>, code: Option<String>, language: SupportedLanguage) -> SnippetResult<String> {
        match (file, code) {
            (Some(path), _) => tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| SnippetError::file_error(&path.display().to_string(), "read source", &e.to_string())),
            (None, Some(code)) => Ok(code),
            (None, None) => Ok(language.template().to_string()),
        }
    }

    async fn analyze_command(&self, file: Option<PathBuf>, code: Option<String>, language: Option<String>) -> SnippetResult<()> {
        let language = self.resolve_language(language)?;
        let source = Self::read_source(file, code, language).await?;
        let request = AnalysisRequest::new(source, language)?;
        let api_key = ConfigManager::api_key(&self.config.ai)?;

        let provider = GeminiProvider::from_config(&self.config.ai, api_key);
        log::debug!("Using {} model {}", self.config.ai.provider, provider.model());
        let analyzer = CodeAnalyzer::new(Arc::new(provider));

        let mut logger = AnimatedLogger::new("Analyzing code");
        logger.start();
        let analysis = analyzer.analyze(&request).await;

        if analysis.is_error() {
            logger.error("Analysis failed").await;
        } else {
            logger.stop("Analysis complete").await;
        }

        CodeAnalyzer::print_analysis_report(&analysis);

        if let Some(banner) = analysis.suggestions.first().filter(|_| analysis.is_error()) {
            log::error!("❌ {banner}");
        }

        Ok(())
    }

    async fn test_data_command(&self, user: UserIdentity, action: TestDataAction) -> SnippetResult<()> {
        match action {
            TestDataAction::Add => {
                if test_data::add_test_data(self.store.as_ref(), &user.uid).await {
                    log::info!("✅ Test data added for {}", user.email);
                    Ok(())
                } else {
                    Err(SnippetError::store_error(test_data::TEST_COLLECTION, &user.uid, "write", "failed to add test data"))
                }
            }
            TestDataAction::Get => {
                match test_data::get_test_data(self.store.as_ref(), &user.uid).await {
                    Some(fields) => println!("{}", serde_json::to_string_pretty(&fields)?),
                    None => log::info!("ℹ️ No test data found for {}", user.email),
                }
                Ok(())
            }
        }
    }

    fn validate_command(&self) -> SnippetResult<()> {
        log::info!("🔍 Validating configuration...");
        match ConfigManager::validate_config(&self.config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {error}");
                }
                Err(SnippetError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                    Some("Fix the issues above and run 'snippet-analyzer validate' again"),
                ))
            }
        }
    }
}
