//! Token validator tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use super::*;
use crate::domain::entities::token::TokenKind;
use crate::errors::{DomainError, StoreError, TokenError};
use crate::repositories::{InMemoryRevocationStore, RevocationStore};
use crate::services::token::{TokenIssuer, TokenServiceConfig, TokenValidator};

/// Store that is never reachable and counts lookups
#[derive(Default)]
struct UnreachableStore {
    lookups: AtomicUsize,
}

#[async_trait]
impl RevocationStore for UnreachableStore {
    async fn put(&self, _key: &str, _ttl_seconds: i64) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn exists(&self, _key: &str) -> Result<bool, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::unavailable("connection refused"))
    }
}

struct Fixture {
    clock: ManualClock,
    issuer: TokenIssuer,
    store: Arc<InMemoryRevocationStore>,
    validator: TokenValidator<InMemoryRevocationStore>,
}

fn fixture() -> Fixture {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();
    let store = Arc::new(InMemoryRevocationStore::new(Arc::new(clock.clone())));
    let validator = TokenValidator::new(codec, store.clone());

    Fixture {
        clock,
        issuer,
        store,
        validator,
    }
}

#[tokio::test]
async fn test_verify_returns_subject() {
    let f = fixture();
    let pair = f.issuer.issue_pair("a@b.com").unwrap();

    assert_eq!(f.validator.verify(&pair.access_token, TokenKind::Access).await.unwrap(), "a@b.com");
    assert_eq!(f.validator.verify(&pair.refresh_token, TokenKind::Refresh).await.unwrap(), "a@b.com");
}

#[tokio::test]
async fn test_wrong_kind_rejected() {
    let f = fixture();
    let pair = f.issuer.issue_pair("a@b.com").unwrap();

    let err = f.validator.verify(&pair.access_token, TokenKind::Refresh).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::WrongTokenType {
            expected: TokenKind::Refresh,
            actual: TokenKind::Access,
        })
    ));
}

#[tokio::test]
async fn test_revoked_token_rejected() {
    let f = fixture();
    let refresh = f.issuer.issue_refresh("a@b.com").unwrap();

    f.store.put(&refresh, 3600).await.unwrap();

    let err = f.validator.verify(&refresh, TokenKind::Refresh).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
}

#[tokio::test]
async fn test_expired_wins_over_revoked() {
    let f = fixture();
    let access = f.issuer.issue_access("a@b.com").unwrap();
    f.store.put(&access, 3600).await.unwrap();

    f.clock.advance(Duration::minutes(16));

    let err = f.validator.verify(&access, TokenKind::Access).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_refresh_expires_after_lifetime() {
    let f = fixture();
    let refresh = f.issuer.issue_refresh("a@b.com").unwrap();

    f.clock.advance(Duration::days(8));

    let err = f.validator.verify(&refresh, TokenKind::Refresh).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_store_failure_denies() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();
    let store = Arc::new(UnreachableStore::default());
    let validator = TokenValidator::new(codec, store.clone());

    let access = issuer.issue_access("a@b.com").unwrap();
    let err = validator.verify(&access, TokenKind::Access).await.unwrap_err();

    assert!(matches!(err, DomainError::Store(StoreError::Unavailable { .. })));
    assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_tokens_skip_store_lookup() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();
    let store = Arc::new(UnreachableStore::default());
    let validator = TokenValidator::new(codec, store.clone());

    let malformed = validator.verify("garbage", TokenKind::Access).await.unwrap_err();
    assert!(matches!(malformed, DomainError::Token(TokenError::Malformed)));

    let access = issuer.issue_access("a@b.com").unwrap();
    let wrong_kind = validator.verify(&access, TokenKind::Refresh).await.unwrap_err();
    assert!(matches!(wrong_kind, DomainError::Token(TokenError::WrongTokenType { .. })));

    assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validator_over_trait_object() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();
    let store: Arc<dyn RevocationStore> = Arc::new(InMemoryRevocationStore::new(Arc::new(clock.clone())));
    let validator: TokenValidator<dyn RevocationStore> = TokenValidator::new(codec, store);

    let access = issuer.issue_access("a@b.com").unwrap();
    let claims = validator.inspect(&access, TokenKind::Access).await.unwrap();
    assert_eq!(claims.sub, "a@b.com");
}
