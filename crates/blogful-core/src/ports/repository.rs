use async_trait::async_trait;

use crate::domain::{Article, NewArticle};
use crate::error::RepoError;

/// Article repository - the single data-access port of the service.
///
/// The relational store owns the resource; implementations perform one
/// SQL statement per call and hold no state across requests.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch every article. Order is unspecified by contract.
    async fn find_all(&self) -> Result<Vec<Article>, RepoError>;

    /// Find an article by its store-generated id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, RepoError>;

    /// Insert a new article and return the stored row, including the
    /// generated id and publication timestamp.
    async fn insert(&self, article: NewArticle) -> Result<Article, RepoError>;
}
