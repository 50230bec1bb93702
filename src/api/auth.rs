use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Operations the authentication surface exposes. Each route requires exactly
/// one capability from the backing implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCapability {
    Register,
    Login,
    Logout,
}

pub struct AuthRoute {
    pub path: &'static str,
    pub capability: AuthCapability,
}

/// Declarative route registration consumed by [`auth_router`]. Paths are
/// relative to the `/api/auth` mount point.
pub const AUTH_ROUTES: [AuthRoute; 3] = [
    AuthRoute {
        path: "/register",
        capability: AuthCapability::Register,
    },
    AuthRoute {
        path: "/login",
        capability: AuthCapability::Login,
    },
    AuthRoute {
        path: "/logout",
        capability: AuthCapability::Logout,
    },
];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// An issued session. The token goes into the `Authorization: Bearer` header
/// of subsequent requests.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Why an auth operation was refused.
#[derive(Debug)]
pub enum AuthRejection {
    Validation(String),
    Unauthorized(String),
}

impl From<AuthRejection> for AppError {
    fn from(rejection: AuthRejection) -> Self {
        match rejection {
            AuthRejection::Validation(msg) => AppError::Validation(msg),
            AuthRejection::Unauthorized(msg) => AppError::Authentication(msg),
        }
    }
}

/// The account store behind the auth routes.
///
/// The HTTP adapters below are thin; all account semantics live behind this
/// trait so deployments can swap the store without touching the routes.
#[async_trait]
pub trait AuthBackend: Send + Sync + 'static {
    /// Create an account and return a fresh session for it.
    async fn register(&self, payload: SignupPayload) -> Result<Session, AuthRejection>;

    /// Exchange credentials for a session token.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthRejection>;

    /// Invalidate a session token.
    async fn logout(&self, token: &str) -> Result<(), AuthRejection>;
}

/// Build the auth router from [`AUTH_ROUTES`].
pub fn auth_router() -> Router<AppState> {
    AUTH_ROUTES.iter().fold(Router::new(), |router, route| {
        let handler = match route.capability {
            AuthCapability::Register => post(register),
            AuthCapability::Login => post(login),
            AuthCapability::Logout => post(logout),
        };
        router.route(route.path, handler)
    })
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> AppResult<(StatusCode, Json<Session>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let session = state.auth.register(payload).await?;

    tracing::info!(username = %session.username, "Account registered");

    Ok((StatusCode::CREATED, Json(session)))
}

async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<Session>> {
    let session = state.auth.login(credentials).await?;

    tracing::info!(username = %session.username, "Session opened");

    Ok(Json(session))
}

async fn logout(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> AppResult<StatusCode> {
    state.auth.logout(authorization.token()).await?;

    Ok(StatusCode::NO_CONTENT)
}
