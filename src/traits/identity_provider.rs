use async_trait::async_trait;
use tokio::sync::watch;
use crate::errors::SnippetResult;
use crate::structs::user_identity::{SignInRequest, UserIdentity};

/// Session source. Subscribers see every sign-in and sign-out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, request: SignInRequest) -> SnippetResult<UserIdentity>;

    async fn sign_out(&self) -> SnippetResult<()>;

    fn current_user(&self) -> Option<UserIdentity>;

    fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>>;
}
