//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait};

use blogful_core::domain::{Article, NewArticle};
use blogful_core::error::RepoError;
use blogful_core::ports::ArticleRepository;

use super::entity::article::{ActiveModel, Entity as ArticleEntity};

/// PostgreSQL article repository.
pub struct PostgresArticleRepository {
    db: DbConn,
}

impl PostgresArticleRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, RepoError> {
        let rows = ArticleEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, RepoError> {
        tracing::debug!(article_id = id, "Finding article by id");

        let row = ArticleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, article: NewArticle) -> Result<Article, RepoError> {
        let model = ActiveModel::from(article)
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }
}
