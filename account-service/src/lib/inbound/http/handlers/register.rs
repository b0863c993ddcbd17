use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ACCOUNT_CREATED;
use super::INVALID_FORM_DATA;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    form: Result<Form<RegisterRequest>, FormRejection>,
) -> Result<ApiSuccess<String>, ApiError> {
    let Form(body) = form.map_err(|e| {
        tracing::warn!(error = %e, "Rejected registration body");
        ApiError::BadRequest(INVALID_FORM_DATA.to_string())
    })?;

    state
        .user_service
        .create_user(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ACCOUNT_CREATED.to_string()))
}

/// Form body; absent fields arrive empty and are rejected by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    email: String,
}

impl RegisterRequest {
    fn into_command(self) -> RegisterUserCommand {
        RegisterUserCommand::new(self.username, self.password, self.email)
    }
}
