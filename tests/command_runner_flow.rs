use std::sync::Arc;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};
use snippet_analyzer::enums::commands::{Commands, TestDataAction};
use snippet_analyzer::errors::SnippetError;
use snippet_analyzer::services::document_stores::memory_document_store::MemoryDocumentStore;
use snippet_analyzer::services::local_session_provider::LocalSessionProvider;
use snippet_analyzer::structs::config::config::Config;
use snippet_analyzer::workers::command_runner::CommandRunner;

struct Harness {
    dir: TempDir,
    store: Arc<MemoryDocumentStore>,
    runner: CommandRunner,
}

async fn harness(config: Config) -> Harness {
    let dir = TempDir::new().unwrap();
    let identity = LocalSessionProvider::open(dir.path().join("session.json")).await.unwrap();
    let store = Arc::new(MemoryDocumentStore::new());
    let runner = CommandRunner::new(config, Arc::new(identity), store.clone());
    Harness { dir, store, runner }
}

fn login(email: &str) -> Commands {
    Commands::Login {
        email: email.to_string(),
        name: None,
        photo: None,
    }
}

#[tokio::test]
async fn protected_commands_require_login() {
    let h = harness(Config::default()).await;

    for command in [
        Commands::Whoami,
        Commands::TestData { action: TestDataAction::Add },
        Commands::Analyze { file: None, code: Some("print(1)".to_string()), language: None },
    ] {
        let error = h.runner.run_command(command).await.unwrap_err();
        assert!(matches!(error, SnippetError::Unauthenticated { .. }));
    }
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_data_add_and_get_after_login() {
    let h = harness(Config::default()).await;

    assert_ok!(h.runner.run_command(login("dev@example.com")).await);
    assert_ok!(h.runner.run_command(Commands::Whoami).await);
    assert_ok!(h.runner.run_command(Commands::TestData { action: TestDataAction::Add }).await);
    assert!(!h.store.is_empty());
    assert_ok!(h.runner.run_command(Commands::TestData { action: TestDataAction::Get }).await);

    assert_ok!(h.runner.run_command(Commands::Logout).await);
    assert_err!(h.runner.run_command(Commands::TestData { action: TestDataAction::Get }).await);
}

#[tokio::test]
async fn blank_code_is_rejected_before_any_request() {
    let h = harness(Config::default()).await;
    assert_ok!(h.runner.run_command(login("dev@example.com")).await);

    let error = h.runner.run_command(Commands::Analyze {
        file: None,
        code: Some("  \n".to_string()),
        language: Some("python".to_string()),
    }).await.unwrap_err();

    assert!(matches!(error, SnippetError::ValidationError { ref field, .. } if field == "source_code"));
}

#[tokio::test]
async fn unknown_language_is_rejected() {
    let h = harness(Config::default()).await;
    assert_ok!(h.runner.run_command(login("dev@example.com")).await);

    let error = h.runner.run_command(Commands::Analyze {
        file: None,
        code: Some("print(1)".to_string()),
        language: Some("cobol".to_string()),
    }).await.unwrap_err();
    assert!(matches!(error, SnippetError::ValidationError { ref field, .. } if field == "language"));

    assert_err!(h.runner.run_command(Commands::Template { language: "cobol".to_string() }).await);
    assert_ok!(h.runner.run_command(Commands::Template { language: "cpp".to_string() }).await);
}

#[tokio::test]
async fn missing_source_file_is_a_file_error() {
    let h = harness(Config::default()).await;
    assert_ok!(h.runner.run_command(login("dev@example.com")).await);

    let error = h.runner.run_command(Commands::Analyze {
        file: Some(h.dir.path().join("missing.py")),
        code: None,
        language: None,
    }).await.unwrap_err();
    assert!(matches!(error, SnippetError::FileOperationError { .. }));
}

#[tokio::test]
async fn validate_reports_bad_config() {
    assert_ok!(harness(Config::default()).await.runner.run_command(Commands::Validate).await);

    let mut config = Config::default();
    config.editor.default_language = "cobol".to_string();
    let error = harness(config).await.runner.run_command(Commands::Validate).await.unwrap_err();
    assert!(matches!(error, SnippetError::ConfigurationError { .. }));
}

#[tokio::test]
async fn logout_clears_an_unreadable_session() {
    let dir = TempDir::new().unwrap();
    let session_path = dir.path().join("session.json");
    std::fs::write(&session_path, "{\"uid\": truncated").unwrap();

    let identity = LocalSessionProvider::open(&session_path).await.unwrap();
    let runner = CommandRunner::new(Config::default(), Arc::new(identity), Arc::new(MemoryDocumentStore::new()));

    assert_ok!(runner.run_command(Commands::Logout).await);
    assert!(!session_path.exists());

    let error = runner.run_command(Commands::Whoami).await.unwrap_err();
    assert!(matches!(error, SnippetError::Unauthenticated { .. }));
}
