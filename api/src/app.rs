//! Application state and factory
//!
//! This module holds the state shared by every worker and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    error::InternalError, middleware::Logger, web, App, HttpResponse,
};

use ts_core::{DomainError, Subject, SubjectRepository, TokenService};
use ts_shared::{error_codes, ErrorResponse, HealthResponse};

use crate::handlers::ApiError;
use crate::routes;

/// State shared across workers
#[derive(Clone)]
pub struct AppState {
    /// Token engine, read-only after startup
    pub token_service: Arc<TokenService>,
    /// Identity store the subject of a valid token is resolved through
    pub subjects: Arc<dyn SubjectRepository>,
}

impl AppState {
    pub fn new(token_service: TokenService, subjects: impl SubjectRepository + 'static) -> Self {
        Self {
            token_service: Arc::new(token_service),
            subjects: Arc::new(subjects),
        }
    }

    /// Looks up the subject a token was issued for
    ///
    /// # Returns
    ///
    /// * `Err(ApiError::Domain(DomainError::NotFound))` - Subject no longer exists
    pub async fn find_subject(&self, subject_id: &str) -> Result<Subject, ApiError> {
        self.subjects
            .find_by_id(subject_id)
            .await?
            .ok_or_else(|| {
                ApiError::Domain(DomainError::NotFound {
                    resource: "subject".to_string(),
                })
            })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::BAD_REQUEST, "Malformed request body"));
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(web::scope("/api/v1").configure(routes::sessions::configure))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "tessera-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
