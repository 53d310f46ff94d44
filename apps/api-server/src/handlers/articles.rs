//! Article endpoints.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use blogful_core::domain::{Article, NewArticle};
use blogful_core::sanitize::clean_html;
use blogful_shared::dto::{ArticleResponse, CreateArticleRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /articles
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.find_all().await?;

    Ok(HttpResponse::Ok().json(articles))
}

/// GET /articles/{article_id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::ArticleNotFound)?;

    Ok(HttpResponse::Ok().json(present(article)))
}

/// POST /articles
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateArticleRequest>,
) -> AppResult<HttpResponse> {
    let new_article = validate(body.into_inner())?;

    let article = state.articles.insert(new_article).await?;
    let location = format!("/articles/{}", article.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(present(article)))
}

/// Reject the request naming the first required field that is missing
/// or null.
fn validate(req: CreateArticleRequest) -> Result<NewArticle, AppError> {
    let title = req.title.ok_or(AppError::MissingField("title"))?;
    let content = req.content.ok_or(AppError::MissingField("content"))?;
    let style = req.style.ok_or(AppError::MissingField("style"))?;

    Ok(NewArticle {
        title,
        content,
        style,
    })
}

/// Response body for a single article, free-text fields sanitized.
fn present(article: Article) -> ArticleResponse {
    ArticleResponse {
        id: article.id,
        style: article.style,
        title: clean_html(&article.title),
        content: clean_html(&article.content),
        date_published: article.date_published,
    }
}
