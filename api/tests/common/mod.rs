//! Shared fixtures for API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use ts_api::AppState;
use ts_core::services::token::ManualClock;
use ts_core::{
    InMemorySubjectRepository, RefreshExpiryPolicy, SecretMaterial, Subject, TokenService,
    TokenServiceConfig,
};

pub const TEST_SECRET: &str = "integration-test-root-secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub clock: Arc<ManualClock>,
    pub subjects: InMemorySubjectRepository,
}

pub fn test_context(policy: RefreshExpiryPolicy) -> TestContext {
    let clock = Arc::new(ManualClock::starting_now());
    let secret = SecretMaterial::new(TEST_SECRET).unwrap();
    let config = TokenServiceConfig::default().with_refresh_policy(policy);
    let service = TokenService::with_clock(&secret, config, clock.clone());

    let subjects = InMemorySubjectRepository::with_subjects([
        Subject::new("user123", "Ada Lovelace", "ada@example.com"),
        Subject::new("admin1", "Grace Hopper", "grace@example.com").with_role("admin"),
    ]);

    TestContext {
        state: web::Data::new(AppState::new(service, subjects.clone())),
        clock,
        subjects,
    }
}
