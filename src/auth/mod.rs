//! Authentication module
//!
//! Optional bearer-token protection for the mutating endpoints. Tokens are
//! HS256 JWTs whose `permissions` claim lists the granted scopes
//! (`post:questions`, `delete:questions`).

mod types;
mod verifier;

pub use types::{AuthConfig, Claims, Permission};
pub use verifier::{bearer_token, check_permission, TokenVerifier};

#[cfg(test)]
mod tests;
