//! Session Extractor
//!
//! Custom extractor for automatically validating session tokens

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{SessionError, SessionTokenService, ShopContext};
use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

/// Session Auth Extractor
///
/// Use this extractor in protected handlers to automatically validate the
/// session token and extract the [`ShopContext`]
impl FromRequestParts<ServerState> for ShopContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(ctx) = parts.extensions.get::<ShopContext>() {
            return Ok(ctx.clone());
        }

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => SessionTokenService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                security_log!("WARN", "session_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::not_authenticated());
            }
        };

        // Validate token
        let sessions = state.session_service();
        match sessions.validate_token(token) {
            Ok(claims) => {
                let ctx = ShopContext::from(claims);

                // Store in extensions for potential reuse
                parts.extensions.insert(ctx.clone());

                Ok(ctx)
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "session_rejected",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );

                match e {
                    SessionError::ExpiredToken => Err(AppError::token_expired()),
                    other => Err(AppError::from(other)),
                }
            }
        }
    }
}
