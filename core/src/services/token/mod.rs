//! Token service module
//!
//! - Access tokens: HMAC-SHA256 signed claims (`ClaimsSigner`)
//! - Refresh tokens: AES-GCM encrypted copies of access tokens (`RefreshEncryptor`)
//! - The issue/validate/refresh protocol binding the two (`TokenService`)
//!
//! Nothing is persisted; every token is self-verifying.

mod claims_signer;
mod clock;
mod config;
mod refresh_encryptor;
mod service;

#[cfg(test)]
mod tests;

pub use claims_signer::{ClaimsSigner, SIGNING_ALGORITHM};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RefreshExpiryPolicy, TokenServiceConfig};
pub use refresh_encryptor::{RefreshEncryptor, NONCE_LEN};
pub use service::TokenService;
