use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::UserServicePort;

/// Prefix shared by every account endpoint.
pub const ACCOUNT_ROUTE_PREFIX: &str = "/api/account";

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
    pub token_validity_minutes: i64,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    token_issuer: Arc<TokenIssuer>,
    token_validity_minutes: i64,
) -> Router {
    let state = AppState {
        user_service,
        token_issuer,
        token_validity_minutes,
    };

    let public_routes = Router::new()
        .route("/authenticate", post(authenticate))
        .route("/register", post(register));

    let protected_routes = Router::new()
        .route("/delete", delete(delete_user))
        .route("/get", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .nest(
            ACCOUNT_ROUTE_PREFIX,
            public_routes.merge(protected_routes),
        )
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
