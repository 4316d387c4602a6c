//! Session endpoints
//!
//! - `GET /sessions/current` - Subject behind the presented bearer token
//! - `POST /sessions/refresh` - Exchange a token pair for a new one

pub mod current;
pub mod refresh;

use actix_web::web;

use crate::middleware::BearerAuth;

pub use current::current_session;
pub use refresh::refresh_session;

/// Registers the session routes under the enclosing scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sessions")
            .service(
                web::resource("/current")
                    .wrap(BearerAuth::new())
                    .route(web::get().to(current_session)),
            )
            .route("/refresh", web::post().to(refresh_session)),
    );
}
