use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use ts_api::config::{build_token_service, load_subject_directory};
use ts_api::{create_app, AppState};
use ts_core::InMemorySubjectRepository;
use ts_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger; RUST_LOG still wins over the configured filter
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(config.logging.filter()));
    logger.format_target(config.logging.show_target);
    if !config.logging.timestamps {
        logger.format_timestamp(None);
    }
    logger.init();

    info!("Starting Tessera API Server ({})", config.environment);
    info!("Token configuration: {:?}", config.auth.token);

    let token_service = match build_token_service(&config.auth.token) {
        Ok(service) => service,
        Err(e) => {
            error!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    };

    let subjects = match &config.auth.subject_directory {
        Some(path) => match load_subject_directory(path) {
            Ok(repository) => repository,
            Err(e) => {
                error!("Refusing to start: {:#}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("SUBJECT_DIRECTORY_PATH not set, starting with an empty subject directory");
            InMemorySubjectRepository::new()
        }
    };

    let app_state = web::Data::new(AppState::new(token_service, subjects));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
