use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::inbound::http::cookies::refresh_cookie;
use crate::inbound::http::router::AppState;

/// `POST /sessions` — verify credentials and open a session.
///
/// The access token goes in the body; the refresh token only ever leaves
/// through the `refreshToken` cookie.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<Response, ApiError> {
    let email = EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let password = Password::new(body.password).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state
        .accounts
        .authenticate(&email, password.as_str())
        .await?;

    let pair = state.tokens.issue(&user.id.to_string(), user.role.as_str())?;

    let cookie = refresh_cookie(
        &pair.refresh_token,
        state.tokens.refresh_ttl(),
        state.secure_cookies,
    )
    .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    let mut response = ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            user: (&user).into(),
            token: pair.access_token,
        },
    )
    .into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);

    Ok(response)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub user: UserData,
    pub token: String,
}
