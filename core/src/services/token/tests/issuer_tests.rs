//! Token issuer tests

use super::*;
use crate::domain::entities::token::{TokenKind, TOKEN_TYPE_BEARER};
use crate::errors::DomainError;
use crate::services::token::{TokenIssuer, TokenServiceConfig};

#[test]
fn test_issue_pair_kinds_and_lifetimes() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();

    let pair = issuer.issue_pair("a@b.com").unwrap();
    let access = codec.decode(&pair.access_token).unwrap();
    let refresh = codec.decode(&pair.refresh_token).unwrap();

    assert_eq!(access.kind, TokenKind::Access);
    assert_eq!(refresh.kind, TokenKind::Refresh);
    assert_eq!(access.sub, refresh.sub);
    assert!(access.exp < refresh.exp);
    assert_ne!(access.jti, refresh.jti);

    assert_eq!(pair.token_type, TOKEN_TYPE_BEARER);
    assert_eq!(pair.access_expires_in, 15 * 60);
    assert_eq!(pair.refresh_expires_in, 7 * 24 * 3600);
}

#[test]
fn test_single_issuance() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);
    let issuer = TokenIssuer::new(codec.clone(), &TokenServiceConfig::default()).unwrap();

    let access = issuer.issue_access("svc@b.com").unwrap();
    let refresh = issuer.issue_refresh("svc@b.com").unwrap();

    assert_eq!(codec.decode(&access).unwrap().kind, TokenKind::Access);
    assert_eq!(codec.decode(&refresh).unwrap().kind, TokenKind::Refresh);
}

#[test]
fn test_access_must_be_shorter_than_refresh() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    // 1 day of access against 1 day of refresh
    let config = TokenServiceConfig {
        access_token_expiry_minutes: 24 * 60,
        refresh_token_expiry_days: 1,
        ..TokenServiceConfig::default()
    };
    let err = TokenIssuer::new(codec.clone(), &config).err().unwrap();
    assert!(matches!(err, DomainError::Configuration { .. }));

    let config = TokenServiceConfig {
        access_token_expiry_minutes: 0,
        ..TokenServiceConfig::default()
    };
    assert!(TokenIssuer::new(codec, &config).is_err());
}

#[test]
fn test_out_of_range_lifetimes_are_configuration_errors() {
    let clock = ManualClock::starting_now();
    let codec = hs256_codec(&clock);

    let config = TokenServiceConfig {
        refresh_token_expiry_days: i64::MAX,
        ..TokenServiceConfig::default()
    };
    assert!(matches!(
        config.refresh_token_lifetime(),
        Err(DomainError::Configuration { .. })
    ));
    assert!(matches!(
        TokenIssuer::new(codec, &config),
        Err(DomainError::Configuration { .. })
    ));

    let mut jwt = sg_shared::JwtConfig::with_secret("shared-config-secret");
    jwt.access_token_expire_minutes = i64::MAX;
    assert!(matches!(
        TokenServiceConfig::from_jwt_config(&jwt),
        Err(DomainError::Configuration { .. })
    ));
}
