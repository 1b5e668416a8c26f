use async_trait::async_trait;
use dashmap::DashMap;
use crate::errors::SnippetResult;
use crate::services::document_stores::validate_segment;
use crate::traits::document_store::{DocumentStore, Fields};

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<(String, String), Fields>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn write(&self, collection: &str, document_id: &str, fields: Fields) -> SnippetResult<()> {
        validate_segment("collection", collection)?;
        validate_segment("document_id", document_id)?;
        self.documents.insert((collection.to_string(), document_id.to_string()), fields);
        Ok(())
    }

    async fn read(&self, collection: &str, document_id: &str) -> SnippetResult<Option<Fields>> {
        validate_segment("collection", collection)?;
        validate_segment("document_id", document_id)?;
        Ok(self
            .documents
            .get(&(collection.to_string(), document_id.to_string()))
            .map(|entry| entry.value().clone()))
    }
}
