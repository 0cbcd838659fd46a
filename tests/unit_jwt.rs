mod common;

use common::test_jwt_config;
use coursemart::config::jwt::JwtConfig;
use coursemart::modules::accounts::model::Role;
use coursemart::utils::errors::AppError;
use coursemart::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

#[test]
fn test_create_access_token_success() {
    let jwt_config = test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "alice123", Role::User, &jwt_config).unwrap();

    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = test_jwt_config();
    let account_id = Uuid::new_v4();

    let token = create_access_token(account_id, "alice123", Role::User, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, account_id.to_string());
    assert_eq!(claims.username, "alice123");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn test_token_embeds_admin_role() {
    let jwt_config = test_jwt_config();

    let token = create_access_token(Uuid::new_v4(), "boss", Role::Admin, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn test_token_expiry_is_issuance_plus_ttl() {
    let jwt_config = test_jwt_config();

    let token = create_access_token(Uuid::new_v4(), "alice123", Role::User, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "alice123", Role::User, &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    let result = verify_token(&token, &wrong_config);
    assert!(matches!(result, Err(AppError::InvalidToken)));
}

#[test]
fn test_verify_token_expired() {
    let config = JwtConfig {
        secret: test_jwt_config().secret,
        access_token_expiry: -120,
    };
    let token = create_access_token(Uuid::new_v4(), "alice123", Role::User, &config).unwrap();

    let result = verify_token(&token, &test_jwt_config());
    assert!(matches!(result, Err(AppError::TokenExpired)));
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(matches!(result, Err(AppError::InvalidToken)), "{token:?}");
    }
}

#[test]
fn test_tampered_token_rejected() {
    let jwt_config = test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "alice123", Role::User, &jwt_config).unwrap();

    // Flip a character in the signature segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let sig = parts.last_mut().unwrap();
    let replacement = if sig.ends_with('A') { "B" } else { "A" };
    sig.replace_range(sig.len() - 1.., replacement);
    let tampered = parts.join(".");

    let result = verify_token(&tampered, &jwt_config);
    assert!(matches!(result, Err(AppError::InvalidToken)));
}

#[test]
fn test_different_accounts_get_different_tokens() {
    let jwt_config = test_jwt_config();
    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();

    let token1 = create_access_token(id1, "user1", Role::User, &jwt_config).unwrap();
    let token2 = create_access_token(id2, "user2", Role::User, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.sub, id1.to_string());
    assert_eq!(claims2.sub, id2.to_string());
}
