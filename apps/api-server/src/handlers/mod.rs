//! HTTP handlers and route configuration.

mod articles;
mod root;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root::index))
        .route("/health", web::get().to(root::health_check))
        .service(
            web::scope("/articles")
                .route("", web::get().to(articles::list))
                .route("", web::post().to(articles::create))
                .route("/{article_id}", web::get().to(articles::get)),
        );
}
