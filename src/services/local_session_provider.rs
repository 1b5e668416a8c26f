use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::watch;
use uuid::Uuid;
use crate::errors::{SnippetError, SnippetResult};
use crate::structs::user_identity::{SignInRequest, UserIdentity};
use crate::traits::identity_provider::IdentityProvider;

/// Session persisted as a JSON file, broadcast through a watch channel.
pub struct LocalSessionProvider {
    session_path: PathBuf,
    state: watch::Sender<Option<UserIdentity>>,
}

impl LocalSessionProvider {
    pub async fn open(session_path: impl Into<PathBuf>) -> SnippetResult<Self> {
        let session_path = session_path.into();
        let current = Self::read_session(&session_path).await?;
        if let Some(user) = &current {
            log::debug!("Restored session for {}", user.email);
        }

        let (state, _) = watch::channel(current);
        Ok(Self { session_path, state })
    }

    async fn read_session(path: &Path) -> SnippetResult<Option<UserIdentity>> {
        match fs::read_to_string(path).await {
            // An unreadable session counts as signed out so `logout` or `login` can replace it.
            Ok(content) => match serde_json::from_str(&content) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    log::warn!("⚠️ Ignoring unreadable session file {}: {e}", path.display());
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnippetError::file_error(&path.display().to_string(), "read session", &e.to_string())),
        }
    }

    async fn write_session(&self, user: &UserIdentity) -> SnippetResult<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(user)?;
        fs::write(&self.session_path, content).await.map_err(|e| {
            SnippetError::file_error(&self.session_path.display().to_string(), "write session", &e.to_string())
        })
    }

    fn validate_email(email: &str) -> SnippetResult<()> {
        let trimmed = email.trim();
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));

        if valid {
            Ok(())
        } else {
            Err(SnippetError::validation_error("email", email, "must be a valid email address", None))
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalSessionProvider {
    async fn sign_in(&self, request: SignInRequest) -> SnippetResult<UserIdentity> {
        Self::validate_email(&request.email)?;
        let email = request.email.trim().to_string();
        let now = Utc::now();

        let user = match self.current_user() {
            Some(existing) if existing.email == email => UserIdentity {
                display_name: request.display_name.or(existing.display_name),
                photo_url: request.photo_url.or(existing.photo_url),
                last_sign_in_at: now,
                ..existing
            },
            _ => UserIdentity {
                uid: Uuid::new_v4().to_string(),
                email,
                display_name: request.display_name,
                photo_url: request.photo_url,
                created_at: now,
                last_sign_in_at: now,
            },
        };

        self.write_session(&user).await?;
        log::info!("🔐 Auth state changed: {}", user.email);
        self.state.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> SnippetResult<()> {
        match fs::remove_file(&self.session_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(SnippetError::file_error(&self.session_path.display().to_string(), "remove session", &e.to_string()));
            }
        }

        log::info!("🔐 Auth state changed: no user");
        self.state.send_replace(None);
        Ok(())
    }

    fn current_user(&self) -> Option<UserIdentity> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.state.subscribe()
    }
}
