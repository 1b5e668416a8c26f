use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::errors::SnippetResult;

pub type Fields = Map<String, Value>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn write(&self, collection: &str, document_id: &str, fields: Fields) -> SnippetResult<()>;

    async fn read(&self, collection: &str, document_id: &str) -> SnippetResult<Option<Fields>>;
}
