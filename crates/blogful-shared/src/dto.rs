//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create an article.
///
/// Every field is required by contract; they are optional here so the
/// handler can name the first one that is missing or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<String>,
}

/// Response containing a single article, free-text fields sanitized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: i32,
    pub style: String,
    pub title: String,
    pub content: String,
    pub date_published: DateTime<Utc>,
}
