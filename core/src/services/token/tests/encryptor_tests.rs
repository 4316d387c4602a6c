//! Unit and property tests for refresh token encryption

use base64::{engine::general_purpose::URL_SAFE, Engine};
use proptest::prelude::*;

use crate::domain::value_objects::SecretMaterial;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{RefreshEncryptor, NONCE_LEN};

/// AES-GCM authentication tag length
const TAG_LEN: usize = 16;

fn create_encryptor(secret: &str) -> RefreshEncryptor {
    RefreshEncryptor::new(&SecretMaterial::new(secret).unwrap())
}

fn token_error(result: Result<Vec<u8>, DomainError>) -> TokenError {
    match result {
        Err(DomainError::Token(kind)) => kind,
        other => panic!("expected a token error, got {:?}", other),
    }
}

#[test]
fn test_wrap_unwrap_roundtrip() {
    let encryptor = create_encryptor("encryptor-secret");
    let plaintext = b"header.payload.signature";

    let sealed = encryptor.wrap(plaintext).unwrap();
    assert_eq!(encryptor.unwrap(&sealed).unwrap(), plaintext);
}

#[test]
fn test_wrap_unwrap_empty_input() {
    let encryptor = create_encryptor("encryptor-secret");

    let sealed = encryptor.wrap(b"").unwrap();
    assert_eq!(URL_SAFE.decode(&sealed).unwrap().len(), NONCE_LEN + TAG_LEN);
    assert!(encryptor.unwrap(&sealed).unwrap().is_empty());
}

#[test]
fn test_wire_layout_is_nonce_ciphertext_tag() {
    let encryptor = create_encryptor("encryptor-secret");
    let plaintext = vec![7u8; 100];

    let sealed = encryptor.wrap(&plaintext).unwrap();
    let raw = URL_SAFE.decode(&sealed).unwrap();
    assert_eq!(raw.len(), NONCE_LEN + plaintext.len() + TAG_LEN);
}

#[test]
fn test_each_wrap_uses_a_fresh_nonce() {
    let encryptor = create_encryptor("encryptor-secret");

    let first = encryptor.wrap(b"same input").unwrap();
    let second = encryptor.wrap(b"same input").unwrap();
    assert_ne!(first, second);

    let first_raw = URL_SAFE.decode(&first).unwrap();
    let second_raw = URL_SAFE.decode(&second).unwrap();
    assert_ne!(first_raw[..NONCE_LEN], second_raw[..NONCE_LEN]);

    assert_eq!(encryptor.unwrap(&first).unwrap(), b"same input");
    assert_eq!(encryptor.unwrap(&second).unwrap(), b"same input");
}

#[test]
fn test_other_key_fails_decryption() {
    let encryptor = create_encryptor("encryptor-secret");
    let other = create_encryptor("another-secret");

    let sealed = encryptor.wrap(b"payload").unwrap();
    assert_eq!(token_error(other.unwrap(&sealed)), TokenError::DecryptionFailed);
}

#[test]
fn test_every_flipped_bit_fails_decryption() {
    let encryptor = create_encryptor("encryptor-secret");
    let sealed = encryptor.wrap(b"abc").unwrap();
    let raw = URL_SAFE.decode(&sealed).unwrap();

    for position in 0..raw.len() {
        let mut tampered = raw.clone();
        tampered[position] ^= 0x01;
        let result = encryptor.unwrap(&URL_SAFE.encode(&tampered));
        assert_eq!(token_error(result), TokenError::DecryptionFailed);
    }
}

#[test]
fn test_truncated_tag_fails_decryption() {
    let encryptor = create_encryptor("encryptor-secret");
    let sealed = encryptor.wrap(b"abc").unwrap();
    let raw = URL_SAFE.decode(&sealed).unwrap();

    let truncated = URL_SAFE.encode(&raw[..raw.len() - 1]);
    assert_eq!(token_error(encryptor.unwrap(&truncated)), TokenError::DecryptionFailed);

    let nonce_only = URL_SAFE.encode(&raw[..NONCE_LEN]);
    assert_eq!(token_error(encryptor.unwrap(&nonce_only)), TokenError::DecryptionFailed);
}

#[test]
fn test_malformed_inputs() {
    let encryptor = create_encryptor("encryptor-secret");

    assert_eq!(token_error(encryptor.unwrap("not base64 at all!")), TokenError::Malformed);
    assert_eq!(token_error(encryptor.unwrap("")), TokenError::Malformed);

    let short = URL_SAFE.encode([0u8; NONCE_LEN - 1]);
    assert_eq!(token_error(encryptor.unwrap(&short)), TokenError::Malformed);
}

proptest! {
    /// Any byte string survives a wrap/unwrap round trip.
    #[test]
    fn roundtrip_preserves_bytes(plaintext in prop::collection::vec(any::<u8>(), 0..512)) {
        let encryptor = create_encryptor("proptest-secret");
        let sealed = encryptor.wrap(&plaintext).unwrap();
        prop_assert_eq!(encryptor.unwrap(&sealed).unwrap(), plaintext);
    }

    /// Replacing any single character of the wrapped value never yields plaintext.
    #[test]
    fn single_character_mutation_is_rejected(
        plaintext in prop::collection::vec(any::<u8>(), 0..128),
        index in any::<prop::sample::Index>(),
        replacement in proptest::char::range('!', '~'),
    ) {
        let encryptor = create_encryptor("proptest-secret");
        let sealed = encryptor.wrap(&plaintext).unwrap();

        let position = index.index(sealed.len());
        let original = sealed.as_bytes()[position] as char;
        prop_assume!(original != replacement);

        let mut mutated = sealed.clone();
        mutated.replace_range(position..position + 1, &replacement.to_string());

        let result = encryptor.unwrap(&mutated);
        prop_assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::DecryptionFailed | TokenError::Malformed))
        ));
    }
}
