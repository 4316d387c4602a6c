//! HTTP surface of the Tessera token engine
//!
//! Bearer authentication for protected routes and the token refresh
//! endpoint, built on actix-web.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
