//! Authentication Middleware
//!
//! JWT validation middleware for protected routes. Tokens are issued by the
//! platform identity provider; this service validates them and exposes the
//! principal (user id plus authority strings) as a request extension.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (platform user ID)
    pub sub: String,
    /// Space-separated authority strings (e.g. "ROLE_USER ROLE_ADM_DPTO")
    #[serde(default)]
    pub auth: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authenticated principal extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub authorities: Vec<String>,
}

impl AuthUser {
    /// Role membership test for the current caller.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    // Check for Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".into()))?;

    // Decode and validate JWT
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.settings.jwt.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".into())
        }
        _ => AppError::Unauthorized("Invalid token".into()),
    })?;

    // Parse user ID from claims
    let user_id: i64 = token_data
        .claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid token claims".into()))?;

    let authorities: Vec<String> = token_data
        .claims
        .auth
        .split_whitespace()
        .map(|s| s.to_string())
        .collect();

    // Insert authenticated principal into request extensions
    request.extensions_mut().insert(AuthUser {
        user_id,
        authorities,
    });

    // Continue to the next handler
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_authority_matches_exact_strings() {
        let principal = AuthUser {
            user_id: 1,
            authorities: vec!["ROLE_USER".to_string(), "ROLE_ADM_DPTO".to_string()],
        };

        assert!(principal.has_authority("ROLE_ADM_DPTO"));
        assert!(!principal.has_authority("ROLE_ADMIN"));
        assert!(!principal.has_authority("ROLE_ADM"));
    }

    #[test]
    fn claims_auth_field_defaults_to_empty() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"7","exp":0,"iat":0}"#).unwrap();
        assert!(claims.auth.is_empty());
    }
}
