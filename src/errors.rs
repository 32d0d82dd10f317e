use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TareaError {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
    pub details: Option<Value>,
}

impl TareaError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            exit_code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// A rejected input; exit code 1.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message, 1)
    }

    /// A reference to something the store does not hold; exit code 1.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message, 1)
    }
}

impl fmt::Display for TareaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for TareaError {}
