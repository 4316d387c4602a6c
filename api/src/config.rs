//! Builds the runtime services from `AppConfig`

use std::path::Path;

use anyhow::Context;
use chrono::{Duration, Utc};

use ts_core::{
    DomainError, DomainResult, InMemorySubjectRepository, RefreshExpiryPolicy, SecretMaterial,
    Subject, TokenService, TokenServiceConfig,
};
use ts_shared::TokenConfig;

/// Creates the token engine from configuration
///
/// # Returns
///
/// * `Err(DomainError::Configuration)` - Missing secret, TTL not positive or out of range, or unknown policy
pub fn build_token_service(config: &TokenConfig) -> DomainResult<TokenService> {
    if !config.has_secret() {
        return Err(DomainError::Configuration {
            message: "SECRET_KEY must be set to a non-empty value".to_string(),
        });
    }
    if config.access_token_ttl <= 0 {
        return Err(DomainError::Configuration {
            message: format!(
                "ACCESS_TOKEN_TTL_SECONDS must be positive, got {}",
                config.access_token_ttl
            ),
        });
    }

    // The expiry of a token issued now must be representable
    let access_token_ttl = Duration::try_seconds(config.access_token_ttl)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| DomainError::Configuration {
            message: format!(
                "ACCESS_TOKEN_TTL_SECONDS is out of range, got {}",
                config.access_token_ttl
            ),
        })?;

    let refresh_policy: RefreshExpiryPolicy = config
        .refresh_policy
        .parse()
        .map_err(|message| DomainError::Configuration { message })?;

    let secret = SecretMaterial::new(config.root_secret.as_bytes())?;
    let service_config = TokenServiceConfig::default()
        .with_access_token_ttl(access_token_ttl)
        .with_refresh_policy(refresh_policy);

    Ok(TokenService::new(&secret, service_config))
}

/// Loads the subject directory from a JSON array of subjects
pub fn load_subject_directory(path: &Path) -> anyhow::Result<InMemorySubjectRepository> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading subject directory {}", path.display()))?;
    let subjects: Vec<Subject> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing subject directory {}", path.display()))?;

    log::info!("Loaded {} subjects from {}", subjects.len(), path.display());
    Ok(InMemorySubjectRepository::with_subjects(subjects))
}
