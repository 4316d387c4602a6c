use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::SessionResponse;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/sessions/current
///
/// Requires `BearerAuth`. Reports the authenticated subject and how long the
/// presented access token remains valid, measured on the same clock the
/// token was validated against.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "subject": {"id": "user123", "name": "Ada", "email": "ada@example.com", "role": "user"},
///     "expires_at": "2024-01-01T02:00:00Z",
///     "expires_in": 7170
/// }
/// ```
pub async fn current_session(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    let AuthContext { subject, claims } = auth;

    HttpResponse::Ok().json(SessionResponse {
        subject: subject.into(),
        expires_at: claims.expiry(),
        expires_in: claims.seconds_until_expiry(state.token_service.now()),
    })
}
