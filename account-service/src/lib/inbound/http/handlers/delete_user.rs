use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::authenticated_user_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// Delete the account the bearer token was issued for.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<String>, ApiError> {
    let user_id = authenticated_user_id(&identity)?;

    state
        .user_service
        .delete_user(user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                format!("User with id {} successfully deleted", user_id),
            )
        })
}
