use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::user::errors::UserError;

pub mod authenticate;
pub mod delete_user;
pub mod get_user;
pub mod register;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_FORM_DATA: &str = "Invalid form data";
pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const ACCOUNT_CREATED: &str = "Account created";
pub const INVALID_USER_ID: &str = "Invalid user id";
const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Request failure as seen by the client.
///
/// `InternalServerError` carries diagnostic detail for the log only; the
/// response body is always a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidInput(_) => {
                tracing::warn!(error = %err, "Rejected malformed input");
                ApiError::BadRequest(INVALID_FORM_DATA.to_string())
            }
            UserError::InvalidCredentials => {
                tracing::warn!(error = %err, "Rejected credentials");
                ApiError::BadRequest(INVALID_CREDENTIALS.to_string())
            }
            UserError::AlreadyExists => {
                tracing::warn!(error = %err, "Rejected duplicate registration");
                ApiError::BadRequest(USER_ALREADY_EXISTS.to_string())
            }
            UserError::NotFound(_) => {
                tracing::warn!(error = %err, "User lookup failed");
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Resolve the caller's user id from the identity the middleware attached.
///
/// A subject that is not an integer means the token was forged or minted
/// for another system; it is reported as a client error.
pub(crate) fn authenticated_user_id(identity: &AuthenticatedIdentity) -> Result<UserId, ApiError> {
    UserId::from_string(&identity.name).map_err(|e| {
        tracing::warn!(error = %e, "Malformed identity claim");
        ApiError::BadRequest(INVALID_USER_ID.to_string())
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
