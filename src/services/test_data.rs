use chrono::Utc;
use serde_json::{json, Value};
use crate::traits::document_store::{DocumentStore, Fields};

pub const TEST_COLLECTION: &str = "test";

/// Writes the sample test document for `user_id`. Failures are logged, not returned.
pub async fn add_test_data(store: &dyn DocumentStore, user_id: &str) -> bool {
    let Value::Object(fields) = json!({
        "name": "Test User",
        "score": 100,
        "createdAt": Utc::now().to_rfc3339(),
        "userId": user_id,
    }) else {
        return false;
    };

    match store.write(TEST_COLLECTION, user_id, fields).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ Error adding test data: {e}");
            false
        }
    }
}

/// Reads the test document for `user_id`. Missing documents and failures both yield `None`.
pub async fn get_test_data(store: &dyn DocumentStore, user_id: &str) -> Option<Fields> {
    match store.read(TEST_COLLECTION, user_id).await {
        Ok(fields) => fields,
        Err(e) => {
            log::error!("❌ Error getting test data: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::document_stores::memory_document_store::MemoryDocumentStore;

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let store = MemoryDocumentStore::new();
        assert!(add_test_data(&store, "user-1").await);

        let fields = get_test_data(&store, "user-1").await.unwrap();
        assert_eq!(fields["name"], "Test User");
        assert_eq!(fields["score"], 100);
        assert_eq!(fields["userId"], "user-1");
        assert!(chrono::DateTime::parse_from_rfc3339(fields["createdAt"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn missing_document_is_none() {
        let store = MemoryDocumentStore::new();
        assert!(get_test_data(&store, "nobody").await.is_none());
    }

    #[tokio::test]
    async fn invalid_user_id_reports_failure() {
        let store = MemoryDocumentStore::new();
        assert!(!add_test_data(&store, "../escape").await);
        assert!(get_test_data(&store, "../escape").await.is_none());
        assert!(store.is_empty());
    }
}
