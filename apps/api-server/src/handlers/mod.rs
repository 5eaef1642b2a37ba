//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Request bodies on the posts API are capped at `max_body_bytes`.
pub fn configure_routes(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        // A non-numeric id can never match a post.
                        .app_data(
                            web::PathConfig::default()
                                .error_handler(|_, _| AppError::NotFound.into()),
                        )
                        .app_data(web::PayloadConfig::new(max_body_bytes))
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list))
                                .route(web::post().to(posts::create)),
                        )
                        .service(
                            web::resource("/{id}")
                                .name(posts::POST_RESOURCE)
                                .route(web::get().to(posts::get))
                                .route(web::put().to(posts::update))
                                .route(web::delete().to(posts::delete)),
                        ),
                ),
        );
    }
}
