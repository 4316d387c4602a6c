//! AES-GCM wrapping of access tokens into opaque refresh tokens

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE, Engine};
use rand::{rngs::OsRng, RngCore};

use crate::domain::value_objects::SecretMaterial;
use crate::errors::{DomainError, DomainResult, TokenError};

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// Authenticated encryption of opaque byte strings
///
/// Wire format: `base64url(nonce || ciphertext || tag)`, no associated data.
pub struct RefreshEncryptor {
    cipher: Aes128Gcm,
}

impl std::fmt::Debug for RefreshEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshEncryptor")
            .field("cipher", &"AES-128-GCM")
            .finish()
    }
}

impl RefreshEncryptor {
    /// Creates an encryptor keyed from the root secret
    pub fn new(secret: &SecretMaterial) -> Self {
        let key = secret.encryption_key();
        let cipher = Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(&key[..]));

        Self { cipher }
    }

    /// Generate a random nonce for AES-GCM
    fn generate_nonce() -> [u8; NONCE_LEN] {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        nonce
    }

    /// Encrypts `plaintext` under a fresh nonce
    pub fn wrap(&self, plaintext: &[u8]) -> DomainResult<String> {
        let nonce = Self::generate_nonce();

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| DomainError::Internal {
                message: format!("Encryption failed: {}", e),
            })?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        Ok(URL_SAFE.encode(sealed))
    }

    /// Decrypts a value produced by [`RefreshEncryptor::wrap`]
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The exact bytes that were wrapped
    /// * `Err(TokenError::Malformed)` - Not base64url, or shorter than a nonce
    /// * `Err(TokenError::DecryptionFailed)` - Tag mismatch (tampered, or another key)
    pub fn unwrap(&self, sealed: &str) -> DomainResult<Vec<u8>> {
        let data = URL_SAFE
            .decode(sealed)
            .map_err(|_| DomainError::Token(TokenError::Malformed))?;

        if data.len() < NONCE_LEN {
            return Err(TokenError::Malformed.into());
        }

        let (nonce, ciphertext) = data.split_at(NONCE_LEN);

        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| DomainError::Token(TokenError::DecryptionFailed))
    }
}
