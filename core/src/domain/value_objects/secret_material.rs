//! Root secret from which every token key is derived.

use std::fmt;

use sha1::{Digest, Sha1};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::{DomainError, DomainResult};

/// Length of the refresh-token encryption key (AES-128)
pub const ENCRYPTION_KEY_LEN: usize = 16;

/// Process-wide root secret
///
/// Constructed once at startup and shared read-only. The bytes are wiped on
/// drop and never appear in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretMaterial {
    root_secret: Vec<u8>,
}

impl SecretMaterial {
    /// Wraps the root secret, rejecting empty material
    pub fn new(root_secret: impl Into<Vec<u8>>) -> DomainResult<Self> {
        let root_secret = root_secret.into();
        if root_secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "root secret must not be empty".to_string(),
            });
        }

        Ok(Self { root_secret })
    }

    /// HMAC key for access token signatures (the root secret itself)
    pub fn signing_key(&self) -> &[u8] {
        &self.root_secret
    }

    /// AES-128 key for refresh tokens: the first 16 bytes of SHA-1(root secret)
    ///
    /// SHA-1 truncation is kept so refresh tokens minted by earlier
    /// deployments of the service still decrypt.
    pub fn encryption_key(&self) -> Zeroizing<[u8; ENCRYPTION_KEY_LEN]> {
        let digest = Sha1::digest(&self.root_secret);
        let mut key = Zeroizing::new([0u8; ENCRYPTION_KEY_LEN]);
        key.copy_from_slice(&digest[..ENCRYPTION_KEY_LEN]);
        key
    }
}

impl fmt::Debug for SecretMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretMaterial([REDACTED])")
    }
}
