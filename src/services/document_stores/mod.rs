pub mod file_document_store;
pub mod memory_document_store;

use crate::errors::{SnippetError, SnippetResult};

/// Collection and document ids become path segments; reject anything that could escape the root.
pub(crate) fn validate_segment(field: &str, value: &str) -> SnippetResult<()> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(SnippetError::validation_error(
            field,
            value,
            "must be a non-empty name without path separators",
            None,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_segment;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_segment("collection", "test").is_ok());
        assert!(validate_segment("document_id", "3f2c-user_01").is_ok());
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for bad in ["", ".", "..", "a/b", "..\\up", "/abs"] {
            assert!(validate_segment("document_id", bad).is_err(), "accepted {bad:?}");
        }
    }
}
