//! HTTP handlers and route configuration.

mod admin;
mod chat;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list))
            .route("/posts/tags", web::get().to(posts::tags))
            .route("/posts/{slug}", web::get().to(posts::detail))
            .route("/chat", web::post().to(chat::reply))
            // Admin routes
            .service(
                web::scope("/admin")
                    .route("/posts", web::post().to(admin::create))
                    .route("/posts/{id}", web::put().to(admin::update))
                    .route("/posts/{id}", web::delete().to(admin::delete))
                    .route("/assets", web::post().to(admin::upload)),
            ),
    );
}
