//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// JSON error envelope: `{ "error": { "message": "..." } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_to_the_wire_shape() {
        let body = ErrorResponse::message("Article doesn't exist");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "error": { "message": "Article doesn't exist" } })
        );
    }
}
