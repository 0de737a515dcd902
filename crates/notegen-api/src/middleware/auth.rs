//! Bearer-token authentication extractor.
//!
//! Parses the `Authorization: Bearer <token>` header and resolves it through
//! the configured [`notegen_core::IdentityProvider`]. Handlers that take a
//! [`RequireAuth`] argument never see the raw token, only the principal.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use notegen_core::{AuthPrincipal, IdentityProvider};

use crate::{ApiError, AppState};

/// Extractor rejecting requests without a valid bearer token.
pub struct RequireAuth(pub AuthPrincipal);

#[async_trait]
impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected bearer token".to_string()))?;

        let principal = state.identity.authenticate(token).await?;
        Ok(RequireAuth(principal))
    }
}
