//! Token codec tests

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use super::*;
use crate::clock::Clock;
use crate::domain::entities::token::TokenKind;
use crate::errors::TokenError;
use crate::services::token::{SigningKeys, TokenCodec, TokenServiceConfig};

#[test]
fn test_hs256_round_trip() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    let token = codec.encode("a@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();
    let claims = codec.decode(&token).unwrap();

    assert_eq!(claims.sub, "a@b.com");
    assert_eq!(claims.kind, TokenKind::Access);
    assert_eq!(claims.iat, clock.now().timestamp());
    assert_eq!(claims.exp, claims.iat + 15 * 60);
    assert_eq!(claims.iss, "sessionguard");
    assert_eq!(claims.aud, "sessionguard-api");
}

#[test]
fn test_rs256_round_trip() {
    let clock = ManualClock::starting_now();
    let codec = rs256_codec(&clock, RSA_PRIVATE, RSA_PUBLIC);

    let token = codec.encode("a@b.com", TokenKind::Refresh, Duration::days(7)).unwrap();
    let claims = codec.decode(&token).unwrap();

    assert_eq!(claims.kind, TokenKind::Refresh);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
}

#[test]
fn test_es256_round_trip() {
    let clock = ManualClock::starting_now();
    let keys = SigningKeys::from_pem_strings(Algorithm::ES256, EC_PRIVATE, EC_PUBLIC).unwrap();
    let config = TokenServiceConfig {
        algorithm: Algorithm::ES256,
        ..TokenServiceConfig::default()
    };
    let codec = TokenCodec::new(Arc::new(keys), &config, Arc::new(clock.clone()));

    let token = codec.encode("a@b.com", TokenKind::Access, Duration::minutes(5)).unwrap();
    assert_eq!(codec.decode(&token).unwrap().sub, "a@b.com");
}

#[test]
fn test_foreign_key_is_invalid_signature() {
    let clock = ManualClock::starting_now();
    let ours = rs256_codec(&clock, RSA_PRIVATE, RSA_PUBLIC);
    let theirs = rs256_codec(&clock, RSA_OTHER_PRIVATE, RSA_OTHER_PUBLIC);

    let forged = theirs.encode("a@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();

    assert_eq!(ours.decode(&forged).unwrap_err(), TokenError::InvalidSignature);
}

#[test]
fn test_foreign_algorithm_is_rejected() {
    let clock = ManualClock::starting_now();
    let rsa = rs256_codec(&clock, RSA_PRIVATE, RSA_PUBLIC);
    let hmac = hs256_codec(&clock);

    let token = hmac.encode("a@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();

    assert_eq!(rsa.decode(&token).unwrap_err(), TokenError::InvalidSignature);
}

#[test]
fn test_tampered_payload_is_invalid_signature() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    let victim = codec.encode("a@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();
    let attacker = codec.encode("root@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();

    let victim_parts: Vec<&str> = victim.split('.').collect();
    let attacker_parts: Vec<&str> = attacker.split('.').collect();
    let spliced = format!("{}.{}.{}", victim_parts[0], attacker_parts[1], victim_parts[2]);

    assert_eq!(codec.decode(&spliced).unwrap_err(), TokenError::InvalidSignature);
}

#[test]
fn test_garbage_is_malformed() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    assert_eq!(codec.decode("not-a-jwt").unwrap_err(), TokenError::Malformed);
    assert_eq!(codec.decode("").unwrap_err(), TokenError::Malformed);
}

#[test]
fn test_unknown_kind_is_malformed() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let now = clock.now().timestamp();

    let claims = json!({
        "sub": "a@b.com",
        "type": "session",
        "iat": now,
        "exp": now + 600,
        "iss": "sessionguard",
        "aud": "sessionguard-api",
        "jti": "abc"
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();

    assert_eq!(codec.decode(&token).unwrap_err(), TokenError::Malformed);
}

#[test]
fn test_wrong_issuer_is_invalid_signature() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let now = clock.now().timestamp();

    let claims = json!({
        "sub": "a@b.com",
        "type": "access",
        "iat": now,
        "exp": now + 600,
        "iss": "someone-else",
        "aud": "sessionguard-api",
        "jti": "abc"
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();

    assert_eq!(codec.decode(&token).unwrap_err(), TokenError::InvalidSignature);
}

#[test]
fn test_expiry_follows_injected_clock() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    let token = codec.encode("a@b.com", TokenKind::Access, Duration::minutes(15)).unwrap();

    clock.advance(Duration::minutes(15) - Duration::seconds(1));
    assert!(codec.decode(&token).is_ok());

    clock.advance(Duration::seconds(1));
    assert_eq!(codec.decode(&token).unwrap_err(), TokenError::Expired);
}

#[test]
fn test_leeway_extends_acceptance() {
    let clock = ManualClock::starting_now();
    let keys = SigningKeys::from_secret(Algorithm::HS256, TEST_SECRET).unwrap();
    let config = TokenServiceConfig {
        leeway_seconds: 30,
        ..TokenServiceConfig::default()
    };
    let codec = TokenCodec::new(Arc::new(keys), &config, Arc::new(clock.clone()));

    let token = codec.encode("a@b.com", TokenKind::Access, Duration::minutes(1)).unwrap();

    clock.advance(Duration::seconds(80));
    assert!(codec.decode(&token).is_ok());

    clock.advance(Duration::seconds(10));
    assert_eq!(codec.decode(&token).unwrap_err(), TokenError::Expired);
}

#[test]
fn test_key_loading_errors() {
    let err = SigningKeys::from_pem_strings(Algorithm::RS256, "garbage", RSA_PUBLIC).unwrap_err();
    assert!(matches!(err, TokenError::KeyLoadError { .. }));

    let err = SigningKeys::from_secret(Algorithm::RS256, TEST_SECRET).unwrap_err();
    assert!(matches!(err, TokenError::KeyLoadError { .. }));

    let err = SigningKeys::from_secret(Algorithm::HS256, b"").unwrap_err();
    assert!(matches!(err, TokenError::KeyLoadError { .. }));

    let err = SigningKeys::from_pem_files(
        Algorithm::RS256,
        "/nonexistent/private.pem",
        "/nonexistent/public.pem",
    )
    .unwrap_err();
    assert!(matches!(err, TokenError::KeyLoadError { .. }));
}

#[test]
fn test_pem_files_remember_their_paths() {
    let private_path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/services/token/tests/fixtures/rsa_private.pem");
    let public_path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/services/token/tests/fixtures/rsa_public.pem");

    let keys = SigningKeys::from_pem_files(Algorithm::RS256, private_path, public_path).unwrap();
    let (private_key, public_key) = keys.key_files().unwrap();
    assert_eq!(private_key, std::path::Path::new(private_path));
    assert_eq!(public_key, std::path::Path::new(public_path));

    let in_memory = SigningKeys::from_pem_strings(Algorithm::RS256, RSA_PRIVATE, RSA_PUBLIC).unwrap();
    assert!(in_memory.key_files().is_none());
    let shared = SigningKeys::from_secret(Algorithm::HS256, TEST_SECRET).unwrap();
    assert!(shared.key_files().is_none());
}

#[test]
fn test_keys_from_shared_config() {
    let config = sg_shared::JwtConfig::with_secret("shared-config-secret");
    let algorithm = config.algorithm.parse::<Algorithm>().unwrap();

    let keys = SigningKeys::from_config(&config, algorithm).unwrap();
    assert_eq!(keys.algorithm(), Algorithm::HS256);

    let debug = format!("{:?}", keys);
    assert!(!debug.contains("shared-config-secret"));
}
