//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogful_core::domain::{Article, NewArticle};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogful_articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub style: String,
    pub date_published: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Article.
impl From<Model> for Article {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            style: model.style,
            date_published: model.date_published.into(),
        }
    }
}

/// Conversion from a creation payload to a SeaORM ActiveModel.
///
/// The id and publication timestamp stay `NotSet` so the store fills
/// them in at insert time.
impl From<NewArticle> for ActiveModel {
    fn from(article: NewArticle) -> Self {
        Self {
            title: Set(article.title),
            content: Set(article.content),
            style: Set(article.style),
            ..Default::default()
        }
    }
}
