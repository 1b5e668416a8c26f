use std::future::Future;
use std::sync::Arc;
use crate::errors::{SnippetError, SnippetResult};
use crate::structs::user_identity::UserIdentity;
use crate::traits::identity_provider::IdentityProvider;

/// The one gate in front of every signed-in operation.
#[derive(Clone)]
pub struct AccessGuard {
    provider: Arc<dyn IdentityProvider>,
}

impl AccessGuard {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub fn require_user(&self, operation: &str) -> SnippetResult<UserIdentity> {
        self.provider.current_user().ok_or_else(|| {
            log::warn!("🚫 Blocked '{operation}': no signed-in user");
            SnippetError::unauthenticated(operation)
        })
    }

    pub async fn run<F, Fut, T>(&self, operation: &str, action: F) -> SnippetResult<T>
    where
        F: FnOnce(UserIdentity) -> Fut,
        Fut: Future<Output = SnippetResult<T>>,
    {
        let user = self.require_user(operation)?;
        log::debug!("Access granted to {} for '{operation}'", user.email);
        action(user).await
    }
}
