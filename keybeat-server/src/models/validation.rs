//! Validation error types

use std::fmt;

/// Client-side input error, raised before anything reaches the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the request body
    MissingField { field: String },

    /// Field present but of the wrong JSON type
    InvalidType { field: String, reason: String },

    /// Body or query string could not be parsed at all
    Malformed { source: &'static str, reason: String },
}

impl ValidationError {
    /// Classify a serde_json error raised while decoding a request body.
    ///
    /// serde only reports field names inside the message, so the field is
    /// recovered from the backticked name it prints.
    pub fn from_json(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        let field = backticked(&message);

        match (err.classify(), field) {
            (serde_json::error::Category::Data, Some(field))
                if message.starts_with("missing field") =>
            {
                Self::MissingField { field }
            }
            (serde_json::error::Category::Data, field) => Self::InvalidType {
                field: field.unwrap_or_else(|| "body".to_owned()),
                reason: message,
            },
            _ => Self::Malformed {
                source: "body",
                reason: message,
            },
        }
    }
}

fn backticked(message: &str) -> Option<String> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(message[start..start + len].to_owned())
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{} is required", field),
            Self::InvalidType { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Malformed { source, reason } => write!(f, "malformed {}: {}", source, reason),
        }
    }
}

impl std::error::Error for ValidationError {}
