use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article entity - a single published article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub style: String,
    pub date_published: DateTime<Utc>,
}

/// Payload for creating an article.
///
/// The id and publication timestamp are assigned by the store at insert
/// time, so they have no place here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub style: String,
}
