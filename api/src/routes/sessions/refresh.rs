use actix_web::{web, HttpResponse, ResponseError};
use validator::Validate;

use ts_core::TokenPair;

use crate::app::AppState;
use crate::dto::{RefreshRequest, TokenResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/sessions/refresh
///
/// Exchanges a previously issued token pair for a brand-new one. The refresh
/// token must decrypt to exactly the presented access token.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64url..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64url...",
///     "expires_in": 7200,
///     "subject": {"id": "user123", "name": "Ada", "email": "ada@example.com", "role": "user"}
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty or malformed body
/// - 401 Unauthorized: Any token failure, or the subject no longer exists
pub async fn refresh_session(
    state: web::Data<AppState>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse {
    match rotate(&state, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => {
            error.log("Token refresh");
            error.error_response()
        }
    }
}

async fn rotate(state: &AppState, request: RefreshRequest) -> Result<TokenResponse, ApiError> {
    request.validate()?;

    let pair = TokenPair::from(request);
    let subject_id = state.token_service.refresh(&pair)?;
    let subject = state.find_subject(&subject_id).await?;

    let new_pair = state.token_service.issue(&subject.id)?;
    log::info!("Rotated token pair for subject {}", subject.id);

    Ok(TokenResponse::new(
        new_pair,
        state.token_service.ttl().num_seconds(),
        subject,
    ))
}
