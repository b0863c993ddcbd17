use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::INVALID_CREDENTIALS;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Exchange a username and password for a bearer token.
///
/// Malformed input, an unknown username, and a wrong password all produce
/// the same response so callers cannot tell which one happened.
pub async fn authenticate(
    State(state): State<AppState>,
    form: Result<Form<AuthenticateRequest>, FormRejection>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let Form(body) = form.map_err(|e| {
        tracing::warn!(error = %e, "Rejected authentication body");
        ApiError::BadRequest(INVALID_CREDENTIALS.to_string())
    })?;

    let user = state
        .user_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            UserError::InvalidInput(_) | UserError::InvalidCredentials => {
                tracing::warn!(error = %e, "Authentication failed");
                ApiError::BadRequest(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let issued = state
        .token_issuer
        .issue(auth::Claims::for_subject(user.id), state.token_validity_minutes)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, expiry = %issued.expires_at, "Token issued");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            token: issued.token,
            expiry: issued.expires_at,
        },
    ))
}

/// Form body; absent fields arrive empty and are rejected by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub username: String,
    pub email: String,
    pub token: String,
    pub expiry: DateTime<Utc>,
}
