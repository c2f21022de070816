//! Tests for the token services

mod codec_tests;
mod issuer_tests;
mod validator_tests;

use std::sync::Arc;

use jsonwebtoken::Algorithm;

use crate::clock::ManualClock;

use super::{SigningKeys, TokenCodec, TokenServiceConfig};

pub(super) const TEST_SECRET: &[u8] = b"test-secret-with-enough-entropy-0123456789";
pub(super) const RSA_PRIVATE: &str = include_str!("fixtures/rsa_private.pem");
pub(super) const RSA_PUBLIC: &str = include_str!("fixtures/rsa_public.pem");
pub(super) const RSA_OTHER_PRIVATE: &str = include_str!("fixtures/rsa_other_private.pem");
pub(super) const RSA_OTHER_PUBLIC: &str = include_str!("fixtures/rsa_other_public.pem");
pub(super) const EC_PRIVATE: &str = include_str!("fixtures/ec_private.pem");
pub(super) const EC_PUBLIC: &str = include_str!("fixtures/ec_public.pem");

pub(super) fn hs256_codec(clock: &ManualClock) -> Arc<TokenCodec> {
    let keys = SigningKeys::from_secret(Algorithm::HS256, TEST_SECRET).unwrap();
    Arc::new(TokenCodec::new(
        Arc::new(keys),
        &TokenServiceConfig::default(),
        Arc::new(clock.clone()),
    ))
}

pub(super) fn rs256_codec(clock: &ManualClock, private_pem: &str, public_pem: &str) -> Arc<TokenCodec> {
    let keys = SigningKeys::from_pem_strings(Algorithm::RS256, private_pem, public_pem).unwrap();
    let config = TokenServiceConfig {
        algorithm: Algorithm::RS256,
        ..TokenServiceConfig::default()
    };
    Arc::new(TokenCodec::new(Arc::new(keys), &config, Arc::new(clock.clone())))
}
