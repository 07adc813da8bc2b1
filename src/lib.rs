use actix_web::web;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rate;

/// Rejected payloads (malformed JSON, missing required fields) get the
/// same `{"error": msg}` body as every handler failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| error::ApiError::Validation(err.to_string()).into())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(handlers::auth::signup))
                    .route("/login", web::post().to(handlers::auth::login)),
            )
            .service(
                web::scope("/hotels")
                    .route("", web::get().to(handlers::hotels::get_hotels))
                    .route("/{id}", web::get().to(handlers::hotels::get_hotel_by_id))
                    .route("/{id}/reviews", web::post().to(handlers::hotels::add_review)),
            )
            .service(
                web::scope("/feedback")
                    .route("", web::get().to(handlers::feedback::get_feedback))
                    .route("", web::post().to(handlers::feedback::add_feedback)),
            )
            .service(
                web::scope("/bookings")
                    .route("", web::post().to(handlers::bookings::create_booking))
                    .route("", web::get().to(handlers::bookings::get_bookings)),
            ),
    );
}
