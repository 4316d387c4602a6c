//! Tests for the token service

mod encryptor_tests;
