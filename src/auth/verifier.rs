//! Bearer token parsing and verification

use super::types::{AuthConfig, Claims, Permission};
use crate::error::{Error, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str> {
    let header = header.ok_or_else(|| Error::auth("Authorization header is expected"))?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => Err(Error::auth(
            "Authorization header must start with \"Bearer\"",
        )),
        (Some(_), None, _) => Err(Error::auth("Token not found")),
        _ => Err(Error::auth("Authorization header must be bearer token")),
    }
}

/// Fail with a 403 error unless `claims` grant `permission`
pub fn check_permission(claims: &Claims, permission: Permission) -> Result<()> {
    if claims.has_permission(permission) {
        Ok(())
    } else {
        Err(Error::forbidden(permission.as_str()))
    }
}

/// Verifies HS256 access tokens
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Build a verifier; `None` when authentication is disabled
    pub fn from_config(config: &AuthConfig) -> Option<Self> {
        if !config.is_enabled() {
            return None;
        }
        let secret = config.secret.as_deref()?;

        let mut validation = Validation::new(Algorithm::HS256);
        match &config.audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = &config.issuer {
            validation.set_issuer(&[iss]);
        }

        Some(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Decode and validate a token
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::auth("Token expired"),
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                    Error::auth("Incorrect claims, check the audience and issuer")
                }
                _ => Error::auth(format!("Unable to parse authentication token: {e}")),
            })
    }

    /// Verify the header's token and require `permission`
    pub fn authorize(&self, header: Option<&str>, permission: Permission) -> Result<Claims> {
        let token = bearer_token(header)?;
        let claims = self.verify(token)?;
        check_permission(&claims, permission)?;
        tracing::debug!(sub = ?claims.sub, %permission, "request authorized");
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}
