//! Tests for the auth module

use super::*;
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use test_case::test_case;

const SECRET: &str = "test-secret";

fn token(secret: &str, claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn claims(permissions: &[&str]) -> Claims {
    Claims {
        sub: Some("user|1".to_string()),
        permissions: permissions.iter().map(ToString::to_string).collect(),
        exp: get_current_timestamp() + 3600,
        aud: None,
        iss: None,
    }
}

fn verifier() -> TokenVerifier {
    TokenVerifier::from_config(&AuthConfig::with_secret(SECRET)).unwrap()
}

// ============================================================================
// Header Parsing Tests
// ============================================================================

#[test]
fn test_bearer_token_ok() {
    assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    assert_eq!(bearer_token(Some("bearer xyz")).unwrap(), "xyz");
}

#[test_case(None ; "missing header")]
#[test_case(Some("") ; "empty header")]
#[test_case(Some("Basic abc") ; "wrong scheme")]
#[test_case(Some("Bearer") ; "missing token")]
#[test_case(Some("Bearer a b") ; "extra parts")]
fn test_bearer_token_rejected(header: Option<&str>) {
    let err = bearer_token(header).unwrap_err();
    assert_eq!(err.status_code(), 401);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_disabled_without_secret() {
    assert!(!AuthConfig::default().is_enabled());
    assert!(TokenVerifier::from_config(&AuthConfig::default()).is_none());

    let empty = AuthConfig::with_secret("");
    assert!(TokenVerifier::from_config(&empty).is_none());
}

#[test]
fn test_permission_strings() {
    assert_eq!(Permission::PostQuestions.as_str(), "post:questions");
    assert_eq!(Permission::DeleteQuestions.to_string(), "delete:questions");
}

// ============================================================================
// Verification Tests
// ============================================================================

#[test]
fn test_verify_valid_token() {
    let jwt = token(SECRET, &claims(&["post:questions"]));
    let decoded = verifier().verify(&jwt).unwrap();
    assert_eq!(decoded.sub.as_deref(), Some("user|1"));
    assert!(decoded.has_permission(Permission::PostQuestions));
    assert!(!decoded.has_permission(Permission::DeleteQuestions));
}

#[test]
fn test_verify_wrong_secret() {
    let jwt = token("other-secret", &claims(&["post:questions"]));
    let err = verifier().verify(&jwt).unwrap_err();
    assert_eq!(err.status_code(), 401);
}

#[test]
fn test_verify_expired() {
    let mut expired = claims(&[]);
    expired.exp = get_current_timestamp() - 3600;
    let err = verifier().verify(&token(SECRET, &expired)).unwrap_err();
    assert!(err.to_string().contains("expired"));
}

#[test]
fn test_verify_garbage() {
    assert!(verifier().verify("not-a-jwt").is_err());
}

#[test]
fn test_verify_audience() {
    let config = AuthConfig {
        secret: Some(SECRET.to_string()),
        audience: Some("trivia".to_string()),
        issuer: None,
    };
    let verifier = TokenVerifier::from_config(&config).unwrap();

    let mut good = claims(&[]);
    good.aud = Some("trivia".to_string());
    assert!(verifier.verify(&token(SECRET, &good)).is_ok());

    let mut bad = claims(&[]);
    bad.aud = Some("coffee".to_string());
    assert!(verifier.verify(&token(SECRET, &bad)).is_err());
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[test]
fn test_check_permission() {
    let c = claims(&["delete:questions"]);
    assert!(check_permission(&c, Permission::DeleteQuestions).is_ok());

    let err = check_permission(&c, Permission::PostQuestions).unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[test]
fn test_authorize() {
    let v = verifier();
    let header = format!("Bearer {}", token(SECRET, &claims(&["delete:questions"])));

    assert!(v
        .authorize(Some(&header), Permission::DeleteQuestions)
        .is_ok());
    assert_eq!(
        v.authorize(Some(&header), Permission::PostQuestions)
            .unwrap_err()
            .status_code(),
        403
    );
    assert_eq!(
        v.authorize(None, Permission::PostQuestions)
            .unwrap_err()
            .status_code(),
        401
    );
}
