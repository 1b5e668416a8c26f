use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use crate::errors::{SnippetError, SnippetResult};
use crate::services::document_stores::validate_segment;
use crate::traits::document_store::{DocumentStore, Fields};

/// One pretty-printed JSON file per document: `<root>/<collection>/<id>.json`.
pub struct FileDocumentStore {
    root: PathBuf,
}

impl FileDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, collection: &str, document_id: &str) -> SnippetResult<PathBuf> {
        validate_segment("collection", collection)?;
        validate_segment("document_id", document_id)?;
        Ok(self.root.join(collection).join(format!("{document_id}.json")))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn write(&self, collection: &str, document_id: &str, fields: Fields) -> SnippetResult<()> {
        let path = self.document_path(collection, document_id)?;
        let store_error = |e: std::io::Error| SnippetError::store_error(collection, document_id, "write", &e.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(store_error)?;
        }

        let content = serde_json::to_vec_pretty(&Value::Object(fields))?;
        fs::write(&path, content).await.map_err(store_error)?;
        log::debug!("💾 Wrote {}", path.display());
        Ok(())
    }

    async fn read(&self, collection: &str, document_id: &str) -> SnippetResult<Option<Fields>> {
        let path = self.document_path(collection, document_id)?;

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnippetError::store_error(collection, document_id, "read", &e.to_string())),
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(fields) => Ok(Some(fields)),
            _ => Err(SnippetError::store_error(collection, document_id, "read", "document is not a JSON object")),
        }
    }
}
