use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SnippetError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Session errors
    Unauthenticated {
        operation: String,
    },

    // Document store errors
    StoreError {
        collection: String,
        document_id: String,
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SnippetError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn unauthenticated(operation: &str) -> Self {
        Self::Unauthenticated {
            operation: operation.to_string(),
        }
    }

    pub fn store_error(collection: &str, document_id: &str, operation: &str, reason: &str) -> Self {
        Self::StoreError {
            collection: collection.to_string(),
            document_id: document_id.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::ValidationError { .. }
            | Self::ConfigurationError { .. }
            | Self::Unauthenticated { .. }
            | Self::StoreError { .. } => true,
            Self::ConfigurationFileError { .. }
            | Self::FileOperationError { .. }
            | Self::ParseError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::StoreError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::Unauthenticated { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {ctx}"));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::Unauthenticated { operation } => {
                format!("You must be signed in to {operation}\n💡 Run 'snippet-analyzer login --email <address>' first")
            }
            Self::StoreError { collection, document_id, operation, reason } => {
                format!("Document store {operation} failed for '{collection}/{document_id}': {reason}")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for SnippetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SnippetError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for snippet-analyzer operations
pub type SnippetResult<T> = Result<T, SnippetError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &SnippetError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Fix the issue above and run the command again");
        }
    }
}

impl From<std::io::Error> for SnippetError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SnippetError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for SnippetError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<toml::ser::Error> for SnippetError {
    fn from(error: toml::ser::Error) -> Self {
        Self::system_error("TOML serialization", &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_is_low_severity_and_recoverable() {
        let error = SnippetError::unauthenticated("analyze code");
        assert_eq!(error.severity(), ErrorSeverity::Low);
        assert!(error.is_recoverable());
        assert!(error.user_message().contains("signed in to analyze code"));
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SnippetError = json_error.into();
        match error {
            SnippetError::ParseError { content_type, .. } => assert_eq!(content_type, "JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_message_includes_suggestion() {
        let error = SnippetError::validation_error("source_code", "", "must not be empty", Some("Please enter some code to analyze"));
        let message = error.to_string();
        assert!(message.contains("source_code"));
        assert!(message.contains("Please enter some code to analyze"));
    }
}
