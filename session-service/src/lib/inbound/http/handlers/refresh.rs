use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::cookies::extract_refresh_token;
use crate::inbound::http::cookies::refresh_cookie;
use crate::inbound::http::router::AppState;

/// `POST /token/refresh` — rotate the session token pair.
///
/// The inbound refresh token is read from the cookie and nowhere else.
/// Verification must succeed before anything is minted; on success a new
/// pair is issued for the same subject and role and the cookie is replaced.
/// The superseded refresh token stays cryptographically valid until its
/// natural expiry — there is no server-side revocation.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = extract_refresh_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Missing refresh token".to_string()))?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Refresh token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired refresh token".to_string())
    })?;

    let pair = state.tokens.issue(&claims.sub, &claims.role)?;

    let cookie = refresh_cookie(
        &pair.refresh_token,
        state.tokens.refresh_ttl(),
        state.secure_cookies,
    )
    .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    let mut response = ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData {
            token: pair.access_token,
        },
    )
    .into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);

    Ok(response)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub token: String,
}
